mod walker;

pub use walker::SceneWalker;
