use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn integration_load_and_draw() {
    // Load a real file through the public API and draw with a seeded RNG
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("participants.txt");
    std::fs::write(&path, "alice\nbob\n\ncarol\ndave\n").expect("write");

    let participants = raffler_lib::loader::load_participants(&path).expect("load");
    assert_eq!(participants.len(), 4);

    let mut rng = StdRng::seed_from_u64(42);
    let winners =
        raffler_lib::draw::draw_winners(&mut rng, participants.clone(), 2).expect("draw");
    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|w| participants.contains(w)));
    assert_ne!(winners[0], winners[1]);
}
