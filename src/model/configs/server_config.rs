use crate::common::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
