//! The static search plan.
//!
//! Two fixed plans: a comprehensive sweep covering every collection angle
//! and a priority subset for time-boxed runs. Each entry pairs the Google
//! News search phrase (with the `when:24h` freshness qualifier) with the
//! category label suggested for its results. The plan is walked exactly
//! once, in declared order.

use crate::models::QueryPlanEntry;

const fn q(phrase: &'static str, label: &'static str) -> QueryPlanEntry {
    QueryPlanEntry { phrase, label }
}

/// Reduced plan for `--priority` runs.
pub const PRIORITY_PLAN: &[QueryPlanEntry] = &[
    q("drone when:24h", "Drones"),
    q("UAV when:24h", "UAV"),
    q("military drone when:24h", "Military Drones"),
    q("China drone when:24h", "China Drones"),
    q("Russia drone when:24h", "Russia Drones"),
    q("autonomous drone when:24h", "Autonomous Drones"),
    q("drone warfare when:24h", "Drone Warfare"),
    q("site:janes.com drone when:24h", "Jane's Defence"),
    q("site:defensenews.com drone when:24h", "Defense News"),
    q("site:reuters.com drone when:24h", "Reuters"),
    q("Iran drone when:24h", "Iran Drones"),
    q("drone strike when:24h", "Drone Strikes"),
    q("anti-drone when:24h", "Counter-Drone"),
    q("drone swarm when:24h", "Drone Swarms"),
    q("combat drone when:24h", "Combat Systems"),
];

/// Full collection sweep.
pub const COMPREHENSIVE_PLAN: &[QueryPlanEntry] = &[
    // Core drone searches
    q("drone when:24h", "Drones"),
    q("UAV when:24h", "UAV"),
    q("UAS when:24h", "UAS"),
    q("quadcopter when:24h", "Quadcopters"),
    q("unmanned aircraft when:24h", "Unmanned Aircraft"),
    // Military and defense
    q("military drone when:24h", "Military Drones"),
    q("drone warfare when:24h", "Drone Warfare"),
    q("drone strike when:24h", "Drone Strikes"),
    q("combat drone when:24h", "Combat Systems"),
    q("tactical UAV when:24h", "Tactical UAV"),
    q("reconnaissance drone when:24h", "ISR Drones"),
    q("armed drone when:24h", "Armed Systems"),
    q("loitering munition when:24h", "Loitering Munitions"),
    q("kamikaze drone when:24h", "Kamikaze Drones"),
    q("suicide drone when:24h", "Suicide Drones"),
    // Autonomous and AI systems
    q("autonomous drone when:24h", "Autonomous Drones"),
    q("AI drone when:24h", "AI-Controlled"),
    q("drone swarm when:24h", "Drone Swarms"),
    q("swarming drone when:24h", "Swarm Technology"),
    q("machine learning drone when:24h", "ML Drones"),
    // Geopolitical
    q("China drone when:24h", "China Drones"),
    q("Chinese UAV when:24h", "Chinese Systems"),
    q("Russia drone when:24h", "Russia Drones"),
    q("Russian UAV when:24h", "Russian Systems"),
    q("Iran drone when:24h", "Iran Drones"),
    q("Iranian UAV when:24h", "Iranian Systems"),
    q("North Korea drone when:24h", "DPRK Drones"),
    q("DPRK UAV when:24h", "DPRK Systems"),
    q("Israel drone when:24h", "Israel Drones"),
    q("Turkey drone when:24h", "Turkey Drones"),
    q("Ukraine drone when:24h", "Ukraine Drones"),
    q("USA drone when:24h", "US Drones"),
    // Counter-drone
    q("anti-drone when:24h", "Counter-Drone"),
    q("counter-UAS when:24h", "Counter-UAS"),
    q("drone defense when:24h", "Drone Defense"),
    q("C-UAS when:24h", "C-UAS Systems"),
    q("drone jammer when:24h", "Electronic Warfare"),
    // Technical categories
    q("FPV drone when:24h", "FPV Systems"),
    q("VTOL UAV when:24h", "VTOL Systems"),
    q("fixed wing drone when:24h", "Fixed Wing"),
    q("solar drone when:24h", "Solar UAV"),
    q("stealth drone when:24h", "Stealth Technology"),
    // Commercial and civilian
    q("commercial drone when:24h", "Commercial Drones"),
    q("drone delivery when:24h", "Delivery Services"),
    q("agricultural drone when:24h", "Agricultural"),
    q("inspection drone when:24h", "Inspection"),
    q("rescue drone when:24h", "Search & Rescue"),
    // Regulatory and policy
    q("FAA drone when:24h", "FAA Regulation"),
    q("drone regulation when:24h", "Drone Policy"),
    q("drone law when:24h", "Drone Law"),
    q("airspace drone when:24h", "Airspace Management"),
    // Technology and innovation
    q("drone cybersecurity when:24h", "Cybersecurity"),
    q("5G drone when:24h", "5G Connectivity"),
    q("drone battery when:24h", "Power Systems"),
    q("satellite drone when:24h", "Satellite Comms"),
    // Defense sources
    q("site:janes.com drone when:24h", "Jane's Defence"),
    q("site:defensenews.com drone when:24h", "Defense News"),
    q("site:thedrive.com drone when:24h", "The Drive"),
    q("site:breakingdefense.com drone when:24h", "Breaking Defense"),
    q("site:c4isrnet.com drone when:24h", "C4ISRNET"),
    // Major news sources
    q("site:reuters.com drone when:24h", "Reuters"),
    q("site:bloomberg.com drone when:24h", "Bloomberg"),
    q("site:wsj.com drone when:24h", "Wall Street Journal"),
    q("site:ft.com drone when:24h", "Financial Times"),
    q("site:cnn.com drone when:24h", "CNN"),
    q("site:bbc.com drone when:24h", "BBC"),
    q("site:npr.org drone when:24h", "NPR"),
    // Technology sources
    q("site:wired.com drone when:24h", "Wired"),
    q("site:arstechnica.com drone when:24h", "Ars Technica"),
    q("site:techcrunch.com drone when:24h", "TechCrunch"),
    q("site:ieee.org drone when:24h", "IEEE"),
    q("site:aviationweek.com drone when:24h", "Aviation Week"),
];

/// Select the plan for this run.
pub fn plan(priority: bool) -> &'static [QueryPlanEntry] {
    if priority {
        PRIORITY_PLAN
    } else {
        COMPREHENSIVE_PLAN
    }
}
