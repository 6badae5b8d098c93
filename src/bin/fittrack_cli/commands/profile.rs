// ABOUTME: Profile commands - show, create and clear the stored onboarding record
// ABOUTME: Create walks the onboarding wizard step by step before saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use fittrack::catalog::Catalog;
use fittrack::config::AppConfig;
use fittrack::credits::SelectionChange;
use fittrack::onboarding::{OnboardingFlow, OnboardingStep};
use fittrack::profile::ProfileRepository;
use fittrack::storage::{open_store, KeyValueStore};
use serde_json::Value;
use tracing::{debug, info};

use crate::helpers::display::{display_goals, print_json};
use crate::helpers::inputs::wizard;
use crate::ProfileArgs;

fn repository(config: &AppConfig) -> Result<ProfileRepository<Box<dyn KeyValueStore>>> {
    let store = open_store(&config.storage)?;
    Ok(ProfileRepository::with_key(
        store,
        config.storage.profile_key.as_str(),
    ))
}

pub fn show(config: &AppConfig, json: bool) -> Result<()> {
    let repository = repository(config)?;
    let Some(record) = repository.load()? else {
        if json {
            return print_json(&Value::Null);
        }
        println!("No profile stored. Run 'fittrack-cli profile create' first.");
        return Ok(());
    };

    if json {
        return print_json(&record);
    }

    let profile = &record.profile;
    println!("Profile {}", record.id);
    println!(
        "   {} cm, {} kg, {} years, {}",
        profile.height_cm, profile.weight_kg, profile.age, profile.gender
    );
    println!("   Goal: {}", record.goal);
    println!("   Completed: {}", record.completed_at.format("%Y-%m-%d %H:%M UTC"));
    if !record.credit_goal_ids.is_empty() {
        println!("   Credit goals: {}", record.credit_goal_ids.join(", "));
    }
    println!();
    display_goals(&record.goals);
    Ok(())
}

pub fn create(
    config: &AppConfig,
    args: &ProfileArgs,
    credit_goal_ids: &[String],
    json: bool,
) -> Result<()> {
    let mut wizard = wizard(args, config.onboarding_flow);
    if wizard.flow() == OnboardingFlow::Simplified && !credit_goal_ids.is_empty() {
        bail!("Credit goals are chosen in the guided flow; pass --flow guided");
    }

    if !credit_goal_ids.is_empty() {
        let catalog = Catalog::load_embedded()?;
        for id in credit_goal_ids {
            let goal = catalog
                .credit_goal(id)
                .ok_or_else(|| anyhow!("Unknown credit goal '{id}'"))?;
            match wizard.select_credit_goal(goal) {
                SelectionChange::LimitReached => {
                    bail!("At most five credit goals can be selected; '{id}' was one too many");
                }
                SelectionChange::AlreadySelected => debug!(goal = %id, "Credit goal repeated"),
                SelectionChange::Added | SelectionChange::Removed => {}
            }
        }
    }

    while wizard.current_step() != OnboardingStep::Summary {
        wizard.next()?;
    }

    let repository = repository(config)?;
    let record = wizard.finish(&repository)?;
    info!(record_id = %record.id, key = repository.key(), "Profile stored");

    if json {
        return print_json(&record);
    }
    println!("Profile saved ({} flow)\n", wizard.flow());
    display_goals(&record.goals);
    Ok(())
}

pub fn clear(config: &AppConfig) -> Result<()> {
    repository(config)?.clear()?;
    println!("Profile cleared");
    Ok(())
}
