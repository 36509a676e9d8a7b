// rust/engine/tests/generator_characterization.rs
#![forbid(unsafe_code)]

/**
 * Generator characterization tests.
 *
 * Purpose:
 * - Lock in observable generator behavior for the canonical scenarios.
 * - Catch regressions in seeding, ordering, dropping and filling semantics.
 *
 * What is tested:
 * - Small grids with short words place everything; oversized words are dropped.
 * - Spaces, hyphens, digits and accents never reach the grid.
 * - Empty input yields a pure filler grid.
 * - Identical `(words, config, seed)` inputs produce identical puzzles.
 * - `retry_budget = 0` and shape/direction mismatches drop words without writing them.
 * - Length-first ordering is visible in the attempt order of `placed`.
 * - Crossing rules of the working grid (same letter ok, different letter rejected).
 */
use wordsearch_engine::{
    Cell, DEVOTIONAL_WORDS, Direction, DirectionSet, GridConfig, LetterGrid, Puzzle,
    PuzzleGenerator, WordOrder, generate, generate_seeded, normalize_word,
};

fn assert_full_grid(p: &Puzzle, width: usize, height: usize) {
    assert_eq!(p.grid.height(), height);
    assert_eq!(p.grid.width(), width);
    let rows = p.grid.to_rows();
    assert_eq!(rows.len(), height);
    for row in rows {
        assert_eq!(row.len(), width);
        assert!(row.iter().all(|c| c.is_ascii_uppercase()));
    }
}

fn straight(width: usize, height: usize) -> GridConfig {
    GridConfig::new(width, height, [Direction::Horizontal, Direction::Vertical])
        .expect("valid config")
}

#[test]
fn short_words_in_small_grid_are_all_placed() {
    let cfg = straight(8, 8);
    for seed in 0..20u64 {
        let p = generate_seeded(&["JESUS", "DIEU"], &cfg, seed);
        assert_full_grid(&p, 8, 8);

        let mut words = p.placed_words();
        words.sort_unstable();
        assert_eq!(words, vec!["DIEU", "JESUS"]);
        assert!(p.dropped.is_empty());
        assert!(p.verify());
    }
}

#[test]
fn word_longer_than_grid_is_dropped() {
    let cfg = GridConfig::new(10, 10, [Direction::Horizontal]).expect("valid config");
    let p = generate_seeded(&["SUPERCALIFRAGILISTIC"], &cfg, 7);

    assert_full_grid(&p, 10, 10);
    assert!(p.placed.is_empty());
    assert_eq!(p.dropped, vec!["SUPERCALIFRAGILISTIC".to_string()]);
    assert!(!p.all_placed());
    assert_eq!(p.placement_rate(), 0.0);
}

#[test]
fn empty_word_list_yields_filler_only() {
    let cfg = straight(5, 5);
    let words: [&str; 0] = [];
    let p = generate(&words, &cfg);

    assert_full_grid(&p, 5, 5);
    assert!(p.placed.is_empty());
    assert!(p.dropped.is_empty());
    assert!(p.all_placed());
    assert_eq!(p.attempted(), 0);
}

#[test]
fn all_four_directions_place_short_words() {
    let cfg = GridConfig::classic(12, 12).expect("valid config");
    for seed in [1u64, 42, 20260228] {
        let p = generate_seeded(&["AMOUR", "FOI", "PAIX"], &cfg, seed);
        assert_full_grid(&p, 12, 12);
        assert_eq!(p.placed.len(), 3);
        for w in &p.placed {
            let read = p.grid.read_run(w.start, w.direction, w.len());
            assert_eq!(read.as_deref(), Some(w.word.as_str()));
        }
    }
}

#[test]
fn same_seed_same_puzzle() {
    let cfg = GridConfig::classic(15, 15).expect("valid config");
    let a = generate_seeded(DEVOTIONAL_WORDS, &cfg, 1337);
    let b = generate_seeded(DEVOTIONAL_WORDS, &cfg, 1337);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_keep_shape_but_vary_content() {
    let cfg = GridConfig::classic(10, 7).expect("valid config");
    let puzzles: Vec<Puzzle> = (0..8u64)
        .map(|s| generate_seeded(&["GRACE", "JOIE"], &cfg, s))
        .collect();

    for p in &puzzles {
        assert_full_grid(p, 10, 7);
    }
    assert!(puzzles.iter().any(|p| p.grid != puzzles[0].grid));
}

#[test]
fn zero_retry_budget_drops_every_word() {
    let cfg = GridConfig::classic(20, 20)
        .expect("valid config")
        .with_retry_budget(0);
    let p = generate_seeded(&["A", "PAIX", "FOI"], &cfg, 3);

    assert!(p.placed.is_empty());
    assert_eq!(p.dropped.len(), 3);
    assert_full_grid(&p, 20, 20);
}

#[test]
fn vertical_only_in_single_row_drops_multi_letter_words() {
    let cfg = GridConfig::new(9, 1, [Direction::Vertical]).expect("valid config");
    let p = generate_seeded(&["CIEL", "A", "VIE"], &cfg, 11);

    assert_eq!(p.placed_words(), vec!["A"]);
    assert_eq!(p.dropped, vec!["CIEL".to_string(), "VIE".to_string()]);
    assert_full_grid(&p, 9, 1);
}

#[test]
fn words_are_uppercased_before_placement() {
    let cfg = straight(10, 10);
    let p = generate_seeded(&["  jesus ", "Paix"], &cfg, 5);
    let mut words = p.placed_words();
    words.sort_unstable();
    assert_eq!(words, vec!["JESUS", "PAIX"]);
    assert!(p.verify());
}

#[test]
fn multi_word_and_accented_terms_fold_to_letters() {
    assert_eq!(normalize_word("Saint Esprit"), "SAINTESPRIT");
    assert_eq!(normalize_word("Jean-Baptiste"), "JEANBAPTISTE");
    assert_eq!(normalize_word("psaume 23"), "PSAUME");
    assert_eq!(normalize_word("prière"), "PRIERE");
    assert_eq!(normalize_word("l'Éternel"), "LETERNEL");
    assert_eq!(normalize_word("cœur"), "COEUR");

    let cfg = GridConfig::classic(15, 15).expect("valid config");
    let p = generate_seeded(&["saint esprit", "jean-baptiste", "psaume 23", "prière"], &cfg, 1);

    assert_full_grid(&p, 15, 15);
    let mut words = p.placed_words();
    words.sort_unstable();
    assert_eq!(words, vec!["JEANBAPTISTE", "PRIERE", "PSAUME", "SAINTESPRIT"]);
    assert!(p.verify());
}

#[test]
fn blank_words_are_dropped() {
    let cfg = straight(6, 6);
    let p = generate_seeded(&["   ", "FOI", "- 42 -"], &cfg, 9);
    assert_eq!(p.placed_words(), vec!["FOI"]);
    assert_eq!(p.dropped, vec![String::new(), String::new()]);
}

#[test]
fn length_first_order_is_attempt_order() {
    let cfg = GridConfig::classic(14, 14).expect("valid config");
    let p = generate_seeded(&["FOI", "LOUANGE", "PAIX", "AMOUR"], &cfg, 99);

    assert!(p.all_placed());
    assert_eq!(p.placed_words(), vec!["LOUANGE", "AMOUR", "PAIX", "FOI"]);
}

#[test]
fn simple_preset_is_straight_and_shuffled() {
    let cfg = GridConfig::simple(10, 10).expect("valid config");
    assert_eq!(cfg.directions(), &DirectionSet::straight());
    assert_eq!(cfg.order(), WordOrder::Shuffled);
    assert_eq!(cfg.retry_budget(), 50);

    let p = generate_seeded(&["BIBLE", "CROIX", "SALUT"], &cfg, 2024);
    for w in &p.placed {
        assert!(matches!(
            w.direction,
            Direction::Horizontal | Direction::Vertical
        ));
    }
    assert!(p.verify());
}

#[test]
fn batch_generator_matches_seeded_call_for_first_puzzle() {
    let cfg = GridConfig::classic(12, 12).expect("valid config");
    let words = ["ESPRIT", "ANGE", "CIEL"];

    let mut g = PuzzleGenerator::new(cfg.clone(), 555);
    let first = g.generate(&words);
    let second = g.generate(&words);

    assert_eq!(first, generate_seeded(&words, &cfg, 555));
    assert_eq!(g.generated(), 2);
    assert_eq!(second.grid.width(), 12);
}

#[test]
fn crossing_requires_matching_letter() {
    let mut grid = LetterGrid::new(5, 5);
    let cat: Vec<char> = "CAT".chars().collect();
    let cup: Vec<char> = "CUP".chars().collect();
    let dog: Vec<char> = "DOG".chars().collect();

    assert!(grid.fits_word(&cat, Cell::new(0, 0), Direction::Horizontal));
    grid.place_word(&cat, Cell::new(0, 0), Direction::Horizontal);

    assert!(grid.fits_word(&cup, Cell::new(0, 0), Direction::Vertical));
    assert!(!grid.fits_word(&dog, Cell::new(0, 0), Direction::Vertical));
    assert!(!grid.fits_word(&cat, Cell::new(0, 3), Direction::Horizontal));
    assert!(!grid.fits_word(&cat, Cell::new(1, 0), Direction::DiagonalUp));
    assert!(grid.fits_word(&cat, Cell::new(2, 0), Direction::DiagonalUp));

    assert_eq!(grid.empty_count(), 22);
    assert_eq!(grid.get(Cell::new(0, 1)), Some('A'));
    assert_eq!(grid.get(Cell::new(1, 1)), None);
}

#[test]
fn render_lists_placements_and_drops() {
    let cfg = GridConfig::new(4, 4, [Direction::Horizontal]).expect("valid config");
    let p = generate_seeded(&["PAIX", "ALLIANCE"], &cfg, 1);
    let s = p.render_ascii();

    assert_eq!(s.lines().filter(|l| l.starts_with('|')).count(), 4);
    assert!(s.contains("PAIX"));
    assert!(s.contains("dropped: ALLIANCE"));
}
