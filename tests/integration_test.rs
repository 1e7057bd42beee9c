// Integration tests for ridersim
use ridersim::prelude::*;
use ridersim_storage::read_roster;

const HEADER: &str = "Name,Team,Age,AVG,FLT,COB,HLL,MTN,SPR,ITT,GC,OR,Length,Weight";

fn sprint(value: f64) -> SpecialtyScores {
    SpecialtyScores::default().with(Specialty::Sprint, value)
}

fn peloton() -> Roster {
    let rider = |name: &str, age: f64, values: [f64; 8], height: f64, weight: f64| {
        RiderRecord::new(name, age, SpecialtyScores::new(values))
            .with_height(Some(height))
            .with_weight(Some(weight))
    };
    Roster::new(vec![
        rider("Sprinter One", 26.0, [80.0, 40.0, 35.0, 10.0, 95.0, 45.0, 5.0, 70.0], 1.77, 75.0),
        rider("Sprinter Two", 28.0, [75.0, 45.0, 30.0, 12.0, 90.0, 40.0, 8.0, 65.0], 1.80, 78.0),
        rider("Climber One", 24.0, [30.0, 10.0, 85.0, 95.0, 20.0, 55.0, 88.0, 40.0], 1.70, 60.0),
        rider("Climber Two", 31.0, [25.0, 15.0, 80.0, 90.0, 15.0, 60.0, 85.0, 35.0], 1.72, 62.0),
        rider("Rouleur", 29.0, [70.0, 85.0, 70.0, 30.0, 60.0, 50.0, 20.0, 90.0], 1.85, 80.0),
        RiderRecord::new(
            "Chrono Man",
            35.0,
            SpecialtyScores::new([60.0, 30.0, 40.0, 50.0, 20.0, 97.0, 65.0, 50.0]),
        ),
    ])
    .unwrap()
}

#[test]
fn test_sprinter_ranking() {
    let roster = Roster::new(vec![
        RiderRecord::new("A", 25.0, sprint(90.0)),
        RiderRecord::new("B", 26.0, sprint(85.0)),
        RiderRecord::new("C", 45.0, sprint(10.0)),
    ])
    .unwrap();
    let engine = SimilarityEngine::with_defaults(roster).unwrap();

    let similar = engine.similar("A", 2).unwrap();
    assert_eq!(similar.profile, Profile::Sprinter);
    assert_eq!(similar.results.len(), 2);
    assert_eq!(similar.results[0].name(), "B");
    assert_eq!(similar.results[1].name(), "C");
    assert!(similar.results[0].score > similar.results[1].score);
}

#[test]
fn test_scores_bounded_and_query_excluded() {
    let engine = SimilarityEngine::with_defaults(peloton()).unwrap();

    for name in engine.roster().sorted_names() {
        let similar = engine.similar(name, 100).unwrap();
        assert_eq!(similar.results.len(), engine.roster().len() - 1);
        assert!(similar.results.iter().all(|r| r.name() != name));

        for result in &similar.results {
            assert!((0.0..=1.0).contains(&result.score));
            assert!((0.0..=1.0).contains(&result.cosine_score));
            assert!((0.0..=1.0).contains(&result.euclidean_score));
            assert!((0.0..=1.0).contains(&result.physical_score));
            assert!(!result.reasons.is_empty() && result.reasons.len() <= 3);
        }

        let scores: Vec<f64> = similar.results.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let engine = SimilarityEngine::with_defaults(peloton()).unwrap();

    let first = engine.similar("Rouleur", 4).unwrap();
    let second = engine.similar("Rouleur", 4).unwrap();

    let summary = |s: &SimilarRiders| -> Vec<(String, f64, String)> {
        s.results
            .iter()
            .map(|r| (r.name().to_string(), r.score, r.reasons_label()))
            .collect()
    };
    assert_eq!(summary(&first), summary(&second));
    assert_eq!(first.profile, second.profile);
}

#[test]
fn test_profile_bonus_only_for_shared_profile() {
    let engine = SimilarityEngine::with_defaults(peloton()).unwrap();
    let similar = engine.similar("Climber One", 10).unwrap();

    assert_eq!(similar.profile, Profile::Climber);
    for result in &similar.results {
        if result.profile == Profile::Climber {
            assert_eq!(result.profile_bonus, 0.03);
        } else {
            assert_eq!(result.profile_bonus, 0.0);
        }
    }
    assert_eq!(similar.results[0].name(), "Climber Two");
}

#[test]
fn test_unknown_physique_gets_neutral_score() {
    let engine = SimilarityEngine::with_defaults(peloton()).unwrap();
    let similar = engine.similar("Sprinter One", 10).unwrap();

    let chrono = similar
        .results
        .iter()
        .find(|r| r.name() == "Chrono Man")
        .unwrap();
    assert_eq!(chrono.physical_score, 0.5);
}

#[test]
fn test_unknown_rider() {
    let engine = SimilarityEngine::with_defaults(peloton()).unwrap();
    assert_eq!(
        engine.similar("Nobody", 5).unwrap_err(),
        SimilarityError::RiderNotFound("Nobody".to_string())
    );
}

#[test]
fn test_equal_scores_keep_roster_order() {
    let roster = Roster::new(vec![
        RiderRecord::new("Query", 30.0, sprint(70.0)),
        RiderRecord::new("Twin B", 30.0, sprint(50.0)),
        RiderRecord::new("Twin A", 30.0, sprint(50.0)),
    ])
    .unwrap();
    let engine = SimilarityEngine::with_defaults(roster).unwrap();

    let similar = engine.similar("Query", 2).unwrap();
    assert_eq!(similar.results[0].score, similar.results[1].score);
    assert_eq!(similar.results[0].name(), "Twin B");
    assert_eq!(similar.results[1].name(), "Twin A");
}

#[tokio::test]
async fn test_zero_and_missing_weight_match_from_csv() {
    let text = format!(
        "{HEADER}\n\
         Full,Team A,25,,50,50,50,50,90,50,50,50,1.80,70\n\
         Zero,Team B,26,,50,50,50,50,85,50,50,50,1.78,0\n\
         Blank,Team C,27,,50,50,50,50,80,50,50,50,1.82,\n\
         Known,Team D,28,,50,50,50,50,75,50,50,50,1.75,66\n"
    );
    let roster = read_roster(text.as_bytes()).await.unwrap();
    let engine = SimilarityEngine::with_defaults(roster).unwrap();

    let similar = engine.similar("Full", 10).unwrap();
    let physical = |name: &str| {
        similar
            .results
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.physical_score)
            .unwrap()
    };

    assert_eq!(physical("Zero"), 0.5);
    assert_eq!(physical("Blank"), 0.5);
    assert_eq!(physical("Known"), 0.0);
}

#[test]
fn test_custom_config() {
    let config = ScoringConfig::from_json(
        r#"{"metrics": {"cosine": 1.0, "euclidean": 0.0, "physical": 0.0}, "profile_bonus": 0.0}"#,
    )
    .unwrap();
    let engine = SimilarityEngine::new(peloton(), config).unwrap();

    let similar = engine.similar("Sprinter One", 10).unwrap();
    assert!(similar.results.iter().all(|r| r.profile_bonus == 0.0));
    assert_eq!(similar.results[0].name(), "Sprinter Two");
}
