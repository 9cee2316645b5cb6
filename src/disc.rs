pub mod boundary;
pub mod diagnostics;
pub mod limiter;
pub mod mesh;
pub mod scheme;
pub mod stencil;
