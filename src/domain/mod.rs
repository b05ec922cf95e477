// 領域層：核心模型與埠（介面）

pub mod location;
pub mod model;
pub mod ports;
