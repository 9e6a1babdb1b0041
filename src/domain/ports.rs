use crate::domain::model::RosterLimits;
use crate::utils::error::Result;

/// File source seam. The roster format is line-oriented text, so the
/// port hands back the whole content as a string; the implementation
/// owns open/close of the underlying handle.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn limits(&self) -> RosterLimits;
    fn input_path(&self) -> Option<&str>;
}
