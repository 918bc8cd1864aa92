//! Internal implementation for the scaffold pipeline

mod directory;
mod install;
mod manifest;
mod template_copy;

pub(super) use self::directory::create_directory;
pub(super) use self::install::install;
pub(super) use self::manifest::init_manifest;
pub(super) use self::template_copy::copy_templates;
