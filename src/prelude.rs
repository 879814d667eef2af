pub use std::{
    env, fs,
    io::Write,
    ops::Range,
    path::{Path, PathBuf},
};

pub use anyhow::{anyhow, Context};
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info};
pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
