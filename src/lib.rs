pub mod service {
    pub mod config_service;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod models {
    pub mod conversion;
}

pub mod utils {
    pub mod codec;
    pub mod convert;
    pub mod preview;
    pub mod scan;
    pub mod utils;
}
