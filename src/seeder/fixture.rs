//! Literal fixture data for the CoShow 2024 booth event.
//!
//! One event, three missions, and five reward tiers whose win probabilities
//! sum to 1.0. The seeder trusts these values as-is: there is no mission
//! target validation, probability-sum check, or organization lookup.

use chrono::{NaiveDate, NaiveDateTime};
use entity::event_mission::MissionType;

/// Placeholder organization id. Replace with the real organization before
/// seeding a store the event system will actually serve.
pub const ORGANIZATION_ID: &str = "ORG001";

pub struct EventFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub organization_id: &'static str,
}

pub struct MissionFixture {
    pub title: &'static str,
    pub description: &'static str,
    pub mission_type: MissionType,
    pub target_value: Option<&'static str>,
    pub is_required: bool,
    pub display_order: i32,
}

pub struct RewardFixture {
    pub reward_name: &'static str,
    pub reward_grade: i32,
    pub probability: f64,
    pub total_quantity: i32,
    pub image_url: &'static str,
    pub description: &'static str,
}

pub fn event() -> EventFixture {
    EventFixture {
        name: "CoShow 2024 부스 이벤트",
        description: "버스 버디버디 부스를 방문하고 미션을 완료하여 푸짐한 경품을 받아가세요!",
        start_date: instant(2024, 11, 7, 0, 0, 0),
        end_date: instant(2024, 12, 31, 23, 59, 59),
        is_active: true,
        organization_id: ORGANIZATION_ID,
    }
}

/// The three booth missions, display order 1..=3, all required.
pub fn missions() -> Vec<MissionFixture> {
    vec![
        MissionFixture {
            title: "특정 버스 탑승하기",
            description: "5001번 버스를 타고 목적지까지 이동하세요",
            mission_type: MissionType::Boarding,
            target_value: Some("5001"),
            is_required: true,
            display_order: 1,
        },
        MissionFixture {
            title: "특정 정류장 방문하기",
            description: "CoShow 전시장 정류장을 방문하세요",
            mission_type: MissionType::VisitStation,
            // Placeholder; replace with the real station id before use.
            target_value: Some("STATION_COSHOW"),
            is_required: true,
            display_order: 2,
        },
        MissionFixture {
            title: "자동 승하차 감지 완료",
            description: "버스에 탑승하여 자동 승하차 감지 기능을 체험하세요",
            mission_type: MissionType::AutoDetectBoarding,
            target_value: None,
            is_required: true,
            display_order: 3,
        },
    ]
}

/// The five reward tiers, grade 1 (rarest) through 5 (most common).
pub fn rewards() -> Vec<RewardFixture> {
    vec![
        RewardFixture {
            reward_name: "AirPods Pro 2세대",
            reward_grade: 1,
            probability: 0.05,
            total_quantity: 5,
            image_url: "https://example.com/airpods-pro.jpg",
            description: "최신 노이즈 캔슬링 무선 이어폰",
        },
        RewardFixture {
            reward_name: "스타벅스 기프티콘 3만원",
            reward_grade: 2,
            probability: 0.10,
            total_quantity: 10,
            image_url: "https://example.com/starbucks-30k.jpg",
            description: "스타벅스 모바일 기프트카드 3만원권",
        },
        RewardFixture {
            reward_name: "카카오프렌즈 인형",
            reward_grade: 3,
            probability: 0.15,
            total_quantity: 15,
            image_url: "https://example.com/kakao-friends.jpg",
            description: "라이언 또는 어피치 인형 (랜덤)",
        },
        RewardFixture {
            reward_name: "스타벅스 기프티콘 1만원",
            reward_grade: 4,
            probability: 0.20,
            total_quantity: 20,
            image_url: "https://example.com/starbucks-10k.jpg",
            description: "스타벅스 모바일 기프트카드 1만원권",
        },
        RewardFixture {
            reward_name: "버스 버디버디 굿즈",
            reward_grade: 5,
            probability: 0.50,
            total_quantity: 50,
            image_url: "https://example.com/busbuddy-goods.jpg",
            description: "버스 버디버디 에코백 + 스티커 세트",
        },
    ]
}

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("fixture dates are valid")
}
