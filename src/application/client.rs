/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::{Config, VodInfoRoute};
use crate::application::interfaces::{
    CategoryService, ChannelService, ClipService, EmoteService, StreamService, UserService,
    VodService,
};
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::requests::{ClipsRequest, VodsRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Client for the Brime API
///
/// Holds one HTTP session, reused by every request. All operations take
/// `&self` and may run concurrently. Responses are returned exactly as the
/// server sent them, including error bodies.
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Creates a client with its own HTTP session
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP session cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(config)?;
        info!("Brime client created for {}", http_client.config().base_url);
        Ok(Self { http_client })
    }

    /// Creates a client that sends through a caller-supplied HTTP session
    pub fn with_session(config: Config, session: reqwest::Client) -> Self {
        let http_client = HttpClient::with_session(config, session);
        info!("Brime client created for {}", http_client.config().base_url);
        Self { http_client }
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Gets the transport, for requests not covered by the service traits
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Releases the HTTP session
    ///
    /// Consumes the client. Requests still in flight on clones of the
    /// session are not affected.
    pub fn close(self) {
        info!("Closing Brime client for {}", self.config().base_url);
    }

    async fn get(&self, endpoint: Endpoint<'_>) -> Result<Value, AppError> {
        self.http_client.get(&endpoint, &[]).await
    }
}

#[async_trait]
impl UserService for Client {
    async fn user(&self, username: &str) -> Result<Value, AppError> {
        self.get(Endpoint::User(username)).await
    }

    async fn user_following(&self, username: &str) -> Result<Value, AppError> {
        self.get(Endpoint::UserFollowing(username)).await
    }

    async fn user_clips(&self, username: &str) -> Result<Value, AppError> {
        self.get(Endpoint::UserClips(username)).await
    }

    async fn users(&self) -> Result<Value, AppError> {
        self.get(Endpoint::Users).await
    }
}

#[async_trait]
impl ChannelService for Client {
    async fn channel(&self, channel: &str) -> Result<Value, AppError> {
        self.get(Endpoint::Channel(channel)).await
    }

    async fn channel_subs(&self, channel: &str) -> Result<Value, AppError> {
        self.get(Endpoint::ChannelSubscriberCheck(channel)).await
    }
}

#[async_trait]
impl StreamService for Client {
    async fn streams(&self) -> Result<Value, AppError> {
        self.get(Endpoint::Streams).await
    }

    async fn stream(&self, channel: &str) -> Result<Value, AppError> {
        self.get(Endpoint::Stream(channel)).await
    }
}

#[async_trait]
impl ClipService for Client {
    async fn clip_info(&self, clip_id: &str) -> Result<Value, AppError> {
        self.get(Endpoint::ClipInfo(clip_id)).await
    }

    async fn channel_clips(
        &self,
        channel_id: &str,
        request: &ClipsRequest,
    ) -> Result<Value, AppError> {
        self.http_client
            .get(&Endpoint::ChannelClips(channel_id), &request.to_query())
            .await
    }

    async fn create_clip(&self, channel: &str) -> Result<Value, AppError> {
        info!("Creating clip for channel: {}", channel);
        self.http_client
            .post(&Endpoint::CreateClip(channel), &[])
            .await
    }
}

#[async_trait]
impl VodService for Client {
    async fn vod_info(&self, vod_id: &str) -> Result<Value, AppError> {
        let endpoint = match self.config().vod_info_route {
            VodInfoRoute::Legacy => Endpoint::LegacyVodInfo(vod_id),
            VodInfoRoute::Vod => Endpoint::VodInfo(vod_id),
        };
        self.http_client.send(&endpoint, &[]).await
    }

    async fn channel_vods(
        &self,
        channel_id: &str,
        request: &VodsRequest,
    ) -> Result<Value, AppError> {
        self.http_client
            .get(&Endpoint::ChannelVods(channel_id), &request.to_query())
            .await
    }
}

#[async_trait]
impl CategoryService for Client {
    async fn categories(&self) -> Result<Value, AppError> {
        self.get(Endpoint::LiveCategories).await
    }

    async fn category(&self, category: &str) -> Result<Value, AppError> {
        self.get(Endpoint::CategoryLive(category)).await
    }

    async fn category_info(&self, category: &str) -> Result<Value, AppError> {
        self.get(Endpoint::CategoryInfo(category)).await
    }
}

#[async_trait]
impl EmoteService for Client {
    async fn global_emotes(&self) -> Result<Value, AppError> {
        self.get(Endpoint::GlobalEmotes).await
    }

    async fn emote_set(&self, emote_set: &str) -> Result<Value, AppError> {
        self.get(Endpoint::EmoteSet(emote_set)).await
    }

    async fn channel_emotes(&self, channel: &str) -> Result<Value, AppError> {
        self.get(Endpoint::ChannelEmotes(channel)).await
    }
}
