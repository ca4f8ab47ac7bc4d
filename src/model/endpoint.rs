/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Remote endpoints of the Brime API
//!
//! Each [`Endpoint`] variant is one remote capability. It knows its path
//! template and whether it reads or mutates; the transport layer turns that
//! into a verb and a full URL.

use std::fmt;

/// Whether an endpoint reads data or asks the server to change something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Sent as GET
    Read,
    /// Sent with the configured mutation verb
    Mutation,
}

/// How an endpoint's location is joined onto the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Path segments appended after the base path, each percent-encoded
    Segments(Vec<&'a str>),
    /// Path segments joined by `/`, each percent-encoded, and concatenated
    /// onto the base URL without a leading separator
    Suffix(Vec<&'a str>),
}

/// One remote capability of the Brime API, with its identifier arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /user/{username}`
    User(&'a str),
    /// `GET /user/{username}/following`
    UserFollowing(&'a str),
    /// `GET /user/{username}/clips`
    UserClips(&'a str),
    /// `GET /users`
    Users,
    /// `GET /channel/{channel}`
    Channel(&'a str),
    /// `GET /channel/{channel}/subcheck`
    ChannelSubscriberCheck(&'a str),
    /// `GET /streams`
    Streams,
    /// `GET /stream/{channel}`
    Stream(&'a str),
    /// `GET /clip/{clip_id}`
    ClipInfo(&'a str),
    /// `GET /channel/{channel_id}/clips`
    ChannelClips(&'a str),
    /// `POST /clip/{channel}/create`
    CreateClip(&'a str),
    /// `GET /vod/{vod_id}`
    VodInfo(&'a str),
    /// `channel/{vod_id}` glued onto the base URL, sent as a mutation.
    ///
    /// This is the route the API historically used for vod lookups; it
    /// targets a channel path and lacks a separator, so it only resolves
    /// against base URLs that end in `/`.
    LegacyVodInfo(&'a str),
    /// `GET /channel/{channel_id}/vods`
    ChannelVods(&'a str),
    /// `GET /categories/live`
    LiveCategories,
    /// `GET /category/{category}/live`
    CategoryLive(&'a str),
    /// `GET /category/{category}`
    CategoryInfo(&'a str),
    /// `GET /emotesets`
    GlobalEmotes,
    /// `GET /emotesets/{emote_set}`
    EmoteSet(&'a str),
    /// `GET /channel/{channel}/emotes`
    ChannelEmotes(&'a str),
}

impl<'a> Endpoint<'a> {
    /// Whether the endpoint reads or mutates
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        match self {
            Endpoint::CreateClip(_) | Endpoint::LegacyVodInfo(_) => RequestKind::Mutation,
            _ => RequestKind::Read,
        }
    }

    /// Location of the endpoint relative to the base URL
    #[must_use]
    pub fn route(&self) -> Route<'a> {
        let segments = match *self {
            Endpoint::User(username) => vec!["user", username],
            Endpoint::UserFollowing(username) => vec!["user", username, "following"],
            Endpoint::UserClips(username) => vec!["user", username, "clips"],
            Endpoint::Users => vec!["users"],
            Endpoint::Channel(channel) => vec!["channel", channel],
            Endpoint::ChannelSubscriberCheck(channel) => vec!["channel", channel, "subcheck"],
            Endpoint::Streams => vec!["streams"],
            Endpoint::Stream(channel) => vec!["stream", channel],
            Endpoint::ClipInfo(clip_id) => vec!["clip", clip_id],
            Endpoint::ChannelClips(channel_id) => vec!["channel", channel_id, "clips"],
            Endpoint::CreateClip(channel) => vec!["clip", channel, "create"],
            Endpoint::VodInfo(vod_id) => vec!["vod", vod_id],
            Endpoint::LegacyVodInfo(vod_id) => return Route::Suffix(vec!["channel", vod_id]),
            Endpoint::ChannelVods(channel_id) => vec!["channel", channel_id, "vods"],
            Endpoint::LiveCategories => vec!["categories", "live"],
            Endpoint::CategoryLive(category) => vec!["category", category, "live"],
            Endpoint::CategoryInfo(category) => vec!["category", category],
            Endpoint::GlobalEmotes => vec!["emotesets"],
            Endpoint::EmoteSet(emote_set) => vec!["emotesets", emote_set],
            Endpoint::ChannelEmotes(channel) => vec!["channel", channel, "emotes"],
        };
        Route::Segments(segments)
    }
}

impl fmt::Display for Endpoint<'_> {
    /// Unencoded path, without base URL or query. Safe to log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.route() {
            Route::Segments(segments) => {
                for segment in segments {
                    write!(f, "/{segment}")?;
                }
                Ok(())
            }
            Route::Suffix(segments) => f.write_str(&segments.join("/")),
        }
    }
}
