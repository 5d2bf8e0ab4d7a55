#![allow(dead_code, unused_imports)]

pub(crate) mod collaborators;
pub(crate) mod skeleton_archive;
pub(crate) mod test_context;

pub(crate) use collaborators::{RecordingRunner, ScriptedPrompter};
pub(crate) use skeleton_archive::{ENV_TEMPLATE, MANIFEST, skeleton_zip};
pub(crate) use test_context::TestContext;
