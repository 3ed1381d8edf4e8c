mod path;


pub use path::VirtualPath;
