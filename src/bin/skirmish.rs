//! Small scripted skirmish exercising the unit-state systems
//!
//! Loads the standard scenario data, walks a few units up the posture
//! ladder, awards combat experience, and prints what each side's
//! intelligence picture looks like at different spotting qualities.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frontline::catalog::load_scenario_str;
use frontline::core::types::{ProfileKey, TemplateId};
use frontline::deploy::{try_deploy_up, DeployError};
use frontline::experience::LogSink;
use frontline::forces::{Unit, UnitClass};
use frontline::intel::{generate_report, SpottingQuality};
use frontline::turn;

const SCENARIO: &str = include_str!("../../data/standard.toml");

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Frontline skirmish");

    let (catalog, templates) = load_scenario_str(SCENARIO).expect("scenario data is valid");

    let mut tank_bn = Unit::muster(
        "3rd Tank Battalion",
        "USSR",
        UnitClass::Tank,
        ProfileKey::from("TANK_BN"),
        TemplateId::from("SOV_TANK_BN"),
        &catalog,
        &templates,
        100,
    )
    .expect("TANK_BN is in the scenario");

    let mut air_assault = Unit::muster(
        "B Company, 1-101st",
        "US",
        UnitClass::AirMobile,
        ProfileKey::from("AIRMOBILE_CO"),
        TemplateId::from("US_AIRBORNE_BN"),
        &catalog,
        &templates,
        100,
    )
    .expect("AIRMOBILE_CO is in the scenario");

    let mut sink = LogSink;
    let mut rng = ChaCha8Rng::seed_from_u64(0xF0C5);

    for game_turn in 1..=3u32 {
        tracing::info!(game_turn, "--- turn start ---");
        turn::start_turn(&mut tank_bn, game_turn);
        turn::start_turn(&mut air_assault, game_turn);

        match try_deploy_up(&mut tank_bn, &catalog, false, false) {
            Ok(posture) => tracing::info!(unit = %tank_bn.name, %posture, "redeployed"),
            Err(DeployError::AlreadyEmbarked) => {
                tracing::info!(unit = %tank_bn.name, "holding, already embarked")
            }
            Err(reason) => tracing::info!(unit = %tank_bn.name, %reason, "redeploy refused"),
        }

        match try_deploy_up(&mut air_assault, &catalog, false, false) {
            Ok(posture) => tracing::info!(unit = %air_assault.name, %posture, "redeployed"),
            Err(reason) => tracing::info!(unit = %air_assault.name, %reason, "redeploy refused"),
        }

        // A skirmish each turn earns the tankers some experience
        turn::award_combat_experience(&mut tank_bn, 20, &mut sink);
    }

    for quality in [
        SpottingQuality::NotSpotted,
        SpottingQuality::Minimal,
        SpottingQuality::Poor,
        SpottingQuality::Good,
        SpottingQuality::Perfect,
    ] {
        let report = generate_report(
            &templates,
            &tank_bn.template_id,
            &tank_bn.name,
            &tank_bn.nationality,
            tank_bn.posture,
            tank_bn.current_hp,
            tank_bn.max_hp,
            tank_bn.experience.level(),
            tank_bn.efficiency,
            quality,
            &mut rng,
        );

        match report {
            None => tracing::info!(?quality, "target not spotted"),
            Some(report) => {
                let buckets: Vec<String> = report
                    .buckets
                    .iter()
                    .map(|(bucket, count)| format!("{}: {}", bucket, count))
                    .collect();
                tracing::info!(
                    ?quality,
                    unit = %report.unit_name,
                    posture = %report.posture,
                    experience = ?report.experience,
                    equipment = %buckets.join(", "),
                    "intel report"
                );
            }
        }
    }
}
