//! Demo that scores a handful of raw spreadsheet rows (original dataset
//! header spellings) and prints the descending priority table plus the
//! URGENT KPI.

use road_maintenance_scorer::{score_rows, urgent_count, PriorityScorer, RawRow, ScorerConfig};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let scorer = PriorityScorer::from_config(&ScorerConfig::from_env());

    let rows = vec![
        row(&[
            ("Nom de la Commune", "Yaounde 3"),
            ("présence du nid de poule", "Oui"),
            ("classe de voirie", "Primaire"),
            ("linéaire de voirie(ml)", "3000"),
            ("Nombre de point lumineux sur le tronçon", "2"),
        ]),
        row(&[
            ("Nom de la Commune", "Douala 1"),
            ("présence du nid de poule", "non"),
            ("classe de voirie", "Secondaire"),
            ("linéaire de voirie(ml)", "300"),
            ("Nombre de point lumineux sur le tronçon", "20"),
        ]),
        row(&[
            ("Nom de la Commune", "Douala 5"),
            ("présence du nid de poule", ""),
            ("classe de voirie", "Tertiaire"),
            ("linéaire de voirie(ml)", "2500"),
            ("Nombre de point lumineux sur le tronçon", "8"),
        ]),
        row(&[
            ("Nom de la Commune", "Yaounde 7"),
            ("présence du nid de poule", "oui"),
            ("classe de voirie", ""),
            ("linéaire de voirie(ml)", "100"),
            ("Nombre de point lumineux sur le tronçon", "50"),
        ]),
    ];

    let scored = score_rows(&scorer, &rows);

    println!(
        "{:<6} {:<12} {:<12} {:<40} {}",
        "risk", "band", "confidence", "action", "segment"
    );
    for s in &scored {
        println!(
            "{:<6} {:<12} {:<12} {:<40} {:?}",
            s.result.risk_score,
            s.result.band.label(),
            s.result.confidence,
            s.result.action,
            s.segment
        );
    }

    println!("URGENT segments: {}", urgent_count(&scored));
    println!("score-demo done");
}
