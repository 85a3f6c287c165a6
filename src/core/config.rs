//! Configuration module - Tag, attribute and file name constants

/// Tag names
pub mod tags {
    /// Source tag handled by the tpl pass
    pub const TPL: &str = "tpl";

    /// Canonical tag every tpl element is rewritten to
    pub const TEMPLATE: &str = "template";
}

/// Attribute names
pub mod attrs {
    /// Custom data binding attribute
    pub const DATA_BINDING: &str = ":data";

    /// Normalized data attribute
    pub const DATA: &str = "data";
}

/// Project files
pub mod files {
    /// Project config file, looked up from the working directory upwards
    pub const CONFIG: &str = "tplnorm.toml";
}
