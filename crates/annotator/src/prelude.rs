pub use crate::annotate::annotate;
pub use crate::annotate::output_path;
pub use crate::annotate::Annotated;
pub use crate::annotate::Annotator;

pub use crate::line::annotate_line;

pub use crate::mode::Field;
pub use crate::mode::Mode;

pub use crate::Error;
