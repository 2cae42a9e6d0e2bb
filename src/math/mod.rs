mod arc;

pub use arc::{arc_profile, ArcProfile};
