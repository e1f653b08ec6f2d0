use anyhow::Context;
use serde::Deserialize;

/// Server configuration, loaded from a YAML file.
///
/// With no file, the default serves one stream at `/stream` fed from
/// stdin. The listen address can always be overridden with the `LISTEN`
/// environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Live stream resources
    #[serde(default)]
    pub streams: Vec<StreamConfig>,

    /// Static text resources
    #[serde(default)]
    pub static_texts: Vec<StaticTextConfig>,
}

/// One live stream resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// URL path prefix the stream is served under
    pub path: String,

    /// Input file or fifo to drain; stdin when absent
    #[serde(default)]
    pub input: Option<String>,

    /// Content type of the stream payload; "video/mp4" when absent
    #[serde(default)]
    pub content_type: Option<String>,

    /// Ring buffer capacity in bytes; 2 MiB when absent
    #[serde(default)]
    pub capacity: Option<usize>,
}

/// One static text resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticTextConfig {
    /// URL path prefix the text is served under
    pub path: String,

    /// The text to serve
    pub text: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            streams: vec![StreamConfig {
                path: "/stream".to_string(),
                input: None,
                content_type: None,
                capacity: None,
            }],
            static_texts: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by the first command-line
    /// argument, or the defaults when none is given, then applies the
    /// `LISTEN` environment override.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::args().nth(1) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Ok(listen) = std::env::var("LISTEN") {
            config.listen = listen;
        }
        Ok(config)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config file {}", path))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
