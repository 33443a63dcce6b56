use super::*;

#[test]
fn idle_cooldown_allows_sending() {
    let cooldown = Cooldown::default();
    assert!(!cooldown.is_active());
    assert_eq!(cooldown.label(), "Send reset link");
}

#[test]
fn cooldown_counts_down_to_idle() {
    let mut cooldown = Cooldown::default();
    cooldown.start(3);
    assert_eq!(cooldown.label(), "Resend in 3s");
    assert!(cooldown.tick());
    assert!(cooldown.tick());
    assert!(!cooldown.tick());
    assert_eq!(cooldown.remaining(), 0);
}

#[test]
fn tick_when_idle_stays_at_zero() {
    let mut cooldown = Cooldown::default();
    assert!(!cooldown.tick());
    assert_eq!(cooldown.remaining(), 0);
}

#[test]
fn restart_replaces_running_cooldown() {
    let mut cooldown = Cooldown::default();
    cooldown.start(60);
    cooldown.tick();
    cooldown.start(60);
    assert_eq!(cooldown.remaining(), 60);
}
