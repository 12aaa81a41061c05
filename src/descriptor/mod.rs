pub mod basic;
pub mod common;
pub mod group;
pub mod keyframe;
pub mod marker;
pub mod spring;
pub mod transition;
pub mod tree;
