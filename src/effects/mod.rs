pub mod anchors;
pub mod booking;
pub mod images;
pub mod reveal;
pub mod ripple;
pub mod scroll;
