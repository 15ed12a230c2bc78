pub mod sanitize;
pub use sanitize::{
    CANCEL_ENTRIES, ControlEntry, DesiredType, FLOAT_HELP, HELP_ENTRIES, INT_HELP, NO_ENTRIES,
    YES_ENTRIES, bool_help, parse_bool,
};

pub mod terminal;
pub use terminal::{Answer, HELP_NOT_FOUND, INPUT_MARKER, Prompt, Terminal};

pub mod custom;
pub use custom::{CustomTypes, CustomValue};

pub mod escape;
pub use escape::expand;

pub mod float;
pub use float::parse_float;

pub mod sink;
pub use sink::{Console, Sink, SinkOptions};

pub mod typewriter;
pub use typewriter::{Typewriter, TypewriterConfig, print_with_delay};

pub mod title;
pub use title::{set_title, title_sequence, write_title};
