// content shared between the tracker logic in common and the web front end
//
// nothing in here touches the DOM, so these types can be built and tested on the host
pub mod cv;
pub mod profile;
pub mod project;
pub mod section;

pub use section::Section;
