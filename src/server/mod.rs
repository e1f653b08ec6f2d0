//! Server assembly and accept loop

pub mod listener;

use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::resource::{Registry, StaticText, StatusPage, StreamResource};
use crate::stream::{DEFAULT_RING_CAPACITY, Stream};

/// Owns the resource registry and the set of active streams.
///
/// Resources are registered once at startup, in dispatch order: the
/// status page first, then the configured streams, then the static texts.
pub struct Server {
    config: Config,
    registry: Arc<Registry>,
    streams: Vec<Arc<Stream>>,
}

impl Server {
    /// Builds the streams and registry described by the configuration.
    /// Each stream's source task starts draining immediately.
    pub async fn from_config(config: Config) -> anyhow::Result<Server> {
        let mut streams = Vec::new();
        let mut registry = Registry::new();

        for stream_config in &config.streams {
            let capacity = stream_config.capacity.unwrap_or(DEFAULT_RING_CAPACITY);
            let stream = match &stream_config.input {
                Some(input) => {
                    let file = tokio::fs::File::open(input)
                        .await
                        .with_context(|| format!("opening stream input {}", input))?;
                    Stream::spawn(file, capacity)
                }
                None => Stream::spawn(tokio::io::stdin(), capacity),
            };
            streams.push(Arc::clone(&stream));
            tracing::info!(
                path = %stream_config.path,
                input = stream_config.input.as_deref().unwrap_or("stdin"),
                capacity,
                "Stream opened"
            );
        }

        registry.register(Box::new(StatusPage::new(streams.clone())));

        for (stream_config, stream) in config.streams.iter().zip(&streams) {
            let content_type = stream_config
                .content_type
                .as_deref()
                .unwrap_or(crate::resource::stream::DEFAULT_CONTENT_TYPE);
            registry.register(Box::new(StreamResource::new(
                &stream_config.path,
                content_type,
                Arc::clone(stream),
            )));
        }

        for text_config in &config.static_texts {
            registry.register(Box::new(StaticText::new(&text_config.path, &text_config.text)));
        }

        Ok(Server {
            config,
            registry: Arc::new(registry),
            streams,
        })
    }

    /// Runs the accept loop. Blocks until the listener fails.
    pub async fn run(&self) -> anyhow::Result<()> {
        listener::run(&self.config.listen, Arc::clone(&self.registry)).await
    }

    /// Closes every stream and resource. In-flight body loops observe the
    /// cleared active flags and wind down on their own.
    pub fn shutdown(&self) {
        for stream in &self.streams {
            stream.close();
        }
        self.registry.close_all();
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}
