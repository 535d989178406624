pub mod a001_denomination;
pub mod a002_church;
pub mod a003_branch;
pub mod a004_member;
pub mod a005_visitor;
pub mod a006_prayer_request;
pub mod a007_activity;
pub mod a008_notification;
pub mod common;
