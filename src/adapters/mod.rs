// 轉接層：外部系統的具體實作

pub mod http;
