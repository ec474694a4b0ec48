use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::trip::TripPlan;

const SHARE_TITLE_SUFFIX: &str = " 여행 일정";
const CLIPBOARD_CONFIRMATION: &str = "링크가 클립보드에 복사되었습니다!";

const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";
const NAVER_MAP_SEARCH: &str = "https://map.naver.com/v5/search/";
const INSTAGRAM_TAG_EXPLORE: &str = "https://www.instagram.com/explore/tags/";

/// How the front end should share the current plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ShareAction {
    Native {
        title: String,
        text: String,
        url: String,
    },
    Clipboard {
        text: String,
        confirmation: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared,
    Cancelled,
}

pub fn share_action(plan: &TripPlan, page_url: &str, native_available: bool) -> ShareAction {
    if native_available {
        ShareAction::Native {
            title: format!("{}{}", plan.destination, SHARE_TITLE_SUFFIX),
            text: plan.overview.clone(),
            url: page_url.to_string(),
        }
    } else {
        ShareAction::Clipboard {
            text: page_url.to_string(),
            confirmation: CLIPBOARD_CONFIRMATION.to_string(),
        }
    }
}

/// A dismissed share sheet is not an error.
pub fn record_share_outcome(outcome: ShareOutcome) {
    match outcome {
        ShareOutcome::Shared => log::info!("Plan shared"),
        ShareOutcome::Cancelled => log::debug!("Share cancelled by user"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceLinks {
    pub google_maps: String,
    pub naver_map: String,
    pub instagram: String,
}

pub fn place_links(name: &str) -> PlaceLinks {
    let tag: String = name.split_whitespace().collect();

    PlaceLinks {
        google_maps: format!("{}{}", GOOGLE_MAPS_SEARCH, encode_component(name)),
        naver_map: format!("{}{}", NAVER_MAP_SEARCH, encode_component(name)),
        instagram: format!("{}{}/", INSTAGRAM_TAG_EXPLORE, encode_component(&tag)),
    }
}

/// Percent-encodes everything but unreserved characters, spaces as `%20`.
pub fn encode_component(text: &str) -> String {
    // byte_serialize writes spaces as '+' and a literal '+' as %2B
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
