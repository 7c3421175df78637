mod log_level;
mod output_format;
mod phys;
mod text_entry;

pub(crate) use log_level::LogLevel;
pub(crate) use output_format::OutputFormat;
pub(crate) use phys::PhysArg;
pub(crate) use text_entry::TextEntry;
