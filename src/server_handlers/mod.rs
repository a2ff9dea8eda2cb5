pub mod allocate;
pub mod analithics;
pub mod docs;
pub mod upload;

pub use allocate::*;
pub use analithics::*;
pub use docs::*;
pub use upload::*;
