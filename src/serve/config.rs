use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::listing::DescriptionTable;
use crate::{SnapshotError, SnapshotResult};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Directory whose files are served.
    pub root: PathBuf,
    pub bind: IpAddr,
    pub port: u16,
    pub descriptions: DescriptionTable,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            root: PathBuf::from("."),
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            descriptions: DescriptionTable::new(),
        }
    }
}

impl ServeConfig {
    /// Build a config from CLI values, loading the description file if given.
    pub fn from_args(
        root: PathBuf,
        bind: IpAddr,
        port: u16,
        descriptions: Option<&Path>,
    ) -> SnapshotResult<Self> {
        if !root.is_dir() {
            return Err(SnapshotError::Config(format!(
                "not a directory: {}",
                root.display()
            )));
        }
        let descriptions = match descriptions {
            Some(path) => DescriptionTable::load(path)?,
            None => DescriptionTable::new(),
        };
        Ok(ServeConfig {
            root,
            bind,
            port,
            descriptions,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
