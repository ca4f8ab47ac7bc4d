use brime_client::error::AppError;
use brime_client::model::endpoint::Endpoint;
use brime_client::model::http::{HttpClient, build_url};
use brime_client::model::requests::{ClipsRequest, SortOrder};
use brime_client::prelude::{Config, PostVerb};
use reqwest::Method;

const BASE: &str = "https://api-staging.brimelive.com/v1";

fn url(endpoint: Endpoint<'_>, query: &[(&str, String)]) -> String {
    build_url(BASE, &endpoint, "tok", query).unwrap().to_string()
}

#[test]
fn every_endpoint_appends_client_id() {
    let cases = [
        (Endpoint::User("alice"), "/user/alice"),
        (Endpoint::UserFollowing("alice"), "/user/alice/following"),
        (Endpoint::UserClips("alice"), "/user/alice/clips"),
        (Endpoint::Users, "/users"),
        (Endpoint::Channel("geeken"), "/channel/geeken"),
        (Endpoint::ChannelSubscriberCheck("geeken"), "/channel/geeken/subcheck"),
        (Endpoint::Streams, "/streams"),
        (Endpoint::Stream("geeken"), "/stream/geeken"),
        (Endpoint::ClipInfo("xyz"), "/clip/xyz"),
        (Endpoint::ChannelClips("abc123"), "/channel/abc123/clips"),
        (Endpoint::CreateClip("geeken"), "/clip/geeken/create"),
        (Endpoint::VodInfo("v1"), "/vod/v1"),
        (Endpoint::ChannelVods("abc123"), "/channel/abc123/vods"),
        (Endpoint::LiveCategories, "/categories/live"),
        (Endpoint::CategoryLive("gaming"), "/category/gaming/live"),
        (Endpoint::CategoryInfo("gaming"), "/category/gaming"),
        (Endpoint::GlobalEmotes, "/emotesets"),
        (Endpoint::EmoteSet("hype"), "/emotesets/hype"),
        (Endpoint::ChannelEmotes("geeken"), "/channel/geeken/emotes"),
    ];
    for (endpoint, path) in cases {
        assert_eq!(url(endpoint, &[]), format!("{BASE}{path}?client_id=tok"));
    }
}

#[test]
fn channel_clips_example_url() {
    let request = ClipsRequest::default()
        .with_since(100.0)
        .with_limit(10)
        .with_skip(0)
        .with_sort(SortOrder::Asc);
    assert_eq!(
        url(Endpoint::ChannelClips("abc123"), &request.to_query()),
        format!("{BASE}/channel/abc123/clips?client_id=tok&since=100&limit=10&skip=0&sort=asc")
    );
}

#[test]
fn fractional_since_is_kept() {
    let request = ClipsRequest::default().with_since(1612137600.5);
    assert_eq!(
        url(Endpoint::ChannelClips("abc123"), &request.to_query()),
        format!("{BASE}/channel/abc123/clips?client_id=tok&since=1612137600.5&limit=50&skip=0&sort=desc")
    );
}

#[test]
fn legacy_vod_route_has_no_separator() {
    assert_eq!(
        url(Endpoint::LegacyVodInfo("v1"), &[]),
        "https://api-staging.brimelive.com/v1channel/v1?client_id=tok"
    );
}

#[test]
fn trailing_slash_on_base_is_not_doubled() {
    let url = build_url(&format!("{BASE}/"), &Endpoint::Streams, "tok", &[]).unwrap();
    assert_eq!(url.as_str(), format!("{BASE}/streams?client_id=tok"));
}

#[test]
fn identifiers_stay_inside_their_segment() {
    assert_eq!(
        url(Endpoint::User("a b/c?d#e"), &[]),
        format!("{BASE}/user/a%20b%2Fc%3Fd%23e?client_id=tok")
    );
    assert_eq!(
        url(Endpoint::Channel("50%"), &[]),
        format!("{BASE}/channel/50%25?client_id=tok")
    );
}

#[test]
fn legacy_vod_identifiers_stay_inside_their_segment() {
    let legacy = "https://api-staging.brimelive.com/v1channel";
    assert_eq!(
        url(Endpoint::LegacyVodInfo("a#b"), &[]),
        format!("{legacy}/a%23b?client_id=tok")
    );
    assert_eq!(
        url(Endpoint::LegacyVodInfo("a?x=1"), &[]),
        format!("{legacy}/a%3Fx=1?client_id=tok")
    );
    assert_eq!(
        url(Endpoint::LegacyVodInfo("a/b"), &[]),
        format!("{legacy}/a%2Fb?client_id=tok")
    );

    let url = build_url(BASE, &Endpoint::LegacyVodInfo("a?x=1#y"), "tok", &[]).unwrap();
    assert_eq!(url.query(), Some("client_id=tok"));
    assert!(url.fragment().is_none());
}

#[test]
fn printable_identifiers_round_trip_through_the_path() {
    let printable: String = (0x20u8..0x7f).map(char::from).collect();
    let url = build_url(BASE, &Endpoint::Channel(&printable), "tok", &[]).unwrap();

    let segments: Vec<&str> = url.path_segments().unwrap().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "v1");
    assert_eq!(segments[1], "channel");
    assert_eq!(url.query(), Some("client_id=tok"));
    assert!(url.fragment().is_none());
}

#[test]
fn token_is_form_encoded() {
    let url = build_url(BASE, &Endpoint::Users, "a b&c=d", &[]).unwrap();
    assert_eq!(url.query(), Some("client_id=a+b%26c%3Dd"));
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("client_id".to_string(), "a b&c=d".to_string())]);
}

#[test]
fn unparsable_base_is_an_invalid_url() {
    let err = build_url("::nope::", &Endpoint::Users, "tok", &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidUrl(_)));

    let err = build_url("mailto:someone@example.com", &Endpoint::Users, "tok", &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidUrl(msg) if msg.contains("cannot be a base")));
}

#[test]
fn verbs_follow_endpoint_kind_and_config() {
    let post = HttpClient::new(Config::new(BASE, "tok")).unwrap();
    assert_eq!(post.method_for(&Endpoint::CreateClip("c")), Method::POST);
    assert_eq!(post.method_for(&Endpoint::LegacyVodInfo("v")), Method::POST);
    assert_eq!(post.method_for(&Endpoint::Streams), Method::GET);

    let get = HttpClient::new(Config::new(BASE, "tok").with_post_verb(PostVerb::Get)).unwrap();
    assert_eq!(get.method_for(&Endpoint::CreateClip("c")), Method::GET);
    assert_eq!(
        get.url_for(&Endpoint::CreateClip("c"), &[]).unwrap().as_str(),
        format!("{BASE}/clip/c/create?client_id=tok")
    );
}
