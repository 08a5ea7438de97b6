// Input side of the pipeline — directory loading and row normalization.

pub mod loader;
pub mod normalize;
