use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Active,
    Relaxed,
    Cultural,
    Foodie,
    Nature,
    Shopping,
    Nightlife,
    Wellness,
    Photography,
    Luxury,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 10] = [
        TravelStyle::Active,
        TravelStyle::Relaxed,
        TravelStyle::Cultural,
        TravelStyle::Foodie,
        TravelStyle::Nature,
        TravelStyle::Shopping,
        TravelStyle::Nightlife,
        TravelStyle::Wellness,
        TravelStyle::Photography,
        TravelStyle::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Active => "active",
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Cultural => "cultural",
            TravelStyle::Foodie => "foodie",
            TravelStyle::Nature => "nature",
            TravelStyle::Shopping => "shopping",
            TravelStyle::Nightlife => "nightlife",
            TravelStyle::Wellness => "wellness",
            TravelStyle::Photography => "photography",
            TravelStyle::Luxury => "luxury",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Active => "액티브",
            TravelStyle::Relaxed => "휴양",
            TravelStyle::Cultural => "문화",
            TravelStyle::Foodie => "미식",
            TravelStyle::Nature => "자연",
            TravelStyle::Shopping => "쇼핑",
            TravelStyle::Nightlife => "나이트라이프",
            TravelStyle::Wellness => "웰니스",
            TravelStyle::Photography => "포토그래피",
            TravelStyle::Luxury => "럭셔리",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TravelStyle::Active => "모험과 활동적인 여행",
            TravelStyle::Relaxed => "편안하고 여유로운 여행",
            TravelStyle::Cultural => "역사와 문화 탐방",
            TravelStyle::Foodie => "맛집과 음식 중심",
            TravelStyle::Nature => "자연과 풍경 감상",
            TravelStyle::Shopping => "쇼핑과 브랜드 탐방",
            TravelStyle::Nightlife => "밤문화와 엔터테인먼트",
            TravelStyle::Wellness => "힐링과 스파, 요가",
            TravelStyle::Photography => "사진 촬영 중심 여행",
            TravelStyle::Luxury => "고급스러운 프리미엄 여행",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Companions {
    Solo,
    Couple,
    Family,
    Friends,
}

impl Companions {
    pub const ALL: [Companions; 4] = [
        Companions::Solo,
        Companions::Couple,
        Companions::Family,
        Companions::Friends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Companions::Solo => "solo",
            Companions::Couple => "couple",
            Companions::Family => "family",
            Companions::Friends => "friends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Companions::Solo => "혼자",
            Companions::Couple => "연인/부부",
            Companions::Family => "가족",
            Companions::Friends => "친구들",
        }
    }
}

/// Suggested interest tags. Free text outside this list is accepted too.
pub const INTEREST_OPTIONS: [&str; 15] = [
    "맛집", "카페", "쇼핑", "박물관", "미술관", "역사유적", "자연경관", "사진촬영", "야경",
    "전통문화", "현지체험", "액티비티", "피서", "해수욕장", "물놀이",
];

/// The payload posted to `/api/generate-trip`.
///
/// Only `TripForm::build` creates one, and nothing mutates it afterwards.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TripRequest {
    pub(crate) destination: String,
    #[serde(rename = "startDate")]
    pub(crate) start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub(crate) end_date: NaiveDate,
    pub(crate) duration: u32,
    /// 만원
    pub(crate) budget: u32,
    pub(crate) travel_style: Vec<TravelStyle>,
    pub(crate) companions: Companions,
    pub(crate) interests: Vec<String>,
}

impl TripRequest {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn travel_style(&self) -> &[TravelStyle] {
        &self.travel_style
    }

    pub fn companions(&self) -> Companions {
        self.companions
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}
