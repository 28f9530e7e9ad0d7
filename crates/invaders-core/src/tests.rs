#[cfg(test)]
mod tests {
    use crate::commands::{InputState, PlayerCommand};
    use crate::constants::*;
    use crate::difficulty::{is_boss_level, tier_for_level, Difficulty};
    use crate::enums::*;
    use crate::events::{AudioEvent, GameEvent};
    use crate::state::GameSnapshot;

    // ---- Difficulty model ----

    #[test]
    fn test_tier_for_level() {
        assert_eq!(tier_for_level(1), 0);
        assert_eq!(tier_for_level(3), 0);
        assert_eq!(tier_for_level(4), 1);
        assert_eq!(tier_for_level(6), 1);
        assert_eq!(tier_for_level(7), 2);
    }

    #[test]
    fn test_boss_levels() {
        assert!(!is_boss_level(1));
        assert!(!is_boss_level(2));
        assert!(is_boss_level(3));
        assert!(is_boss_level(6));
        assert!(!is_boss_level(7));
    }

    /// Every derived multiplier is monotonic non-decreasing in level.
    #[test]
    fn test_difficulty_monotonic() {
        for level in 1..60 {
            let lo = Difficulty::for_level(level);
            let hi = Difficulty::for_level(level + 1);

            assert!(hi.bullet_speed_mult >= lo.bullet_speed_mult);
            assert!(hi.enemy_bullet_speed >= lo.enemy_bullet_speed);
            assert!(hi.grid_speed >= lo.grid_speed);
            assert!(hi.boss_sway >= lo.boss_sway);
            assert!(hi.spider_drop_chance >= lo.spider_drop_chance);
            assert!(hi.spider_dive_speed >= lo.spider_dive_speed);
            assert!(hi.spider_return_speed >= lo.spider_return_speed);
            assert!(hi.homing_speed >= lo.homing_speed);
            assert!(hi.flyer_speed >= lo.flyer_speed);
            // Idle threshold shrinks (attacks come faster) but never
            // below the floor.
            assert!(hi.boss_idle_threshold <= lo.boss_idle_threshold);
            assert!(hi.boss_idle_threshold >= BOSS_IDLE_FLOOR);
        }
    }

    /// The model is pure: same level, same multiplier set.
    #[test]
    fn test_difficulty_pure() {
        for level in [1, 5, 12, 33] {
            assert_eq!(Difficulty::for_level(level), Difficulty::for_level(level));
        }
    }

    #[test]
    fn test_difficulty_tier_one_values() {
        let d = Difficulty::for_level(4);
        assert_eq!(d.tier, 1);
        assert!((d.bullet_speed_mult - 1.2).abs() < 1e-10);
        assert!((d.enemy_bullet_speed - 4.8).abs() < 1e-10);
        assert_eq!(d.boss_idle_threshold, 90);
        assert!((d.boss_sway - 5.0).abs() < 1e-10);
        assert!((d.homing_speed - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_boss_idle_threshold_floor() {
        // Tier 10 would give 100 - 100 = 0; the floor must hold.
        let d = Difficulty::for_level(31);
        assert_eq!(d.tier, 10);
        assert_eq!(d.boss_idle_threshold, BOSS_IDLE_FLOOR);
    }

    #[test]
    fn test_ambient_fire_pressure_rises_as_wave_thins() {
        let d = Difficulty::for_level(2);
        let full = d.ambient_fire_chance(32);
        let thin = d.ambient_fire_chance(4);
        assert!(thin > full);
        assert!((full - (AMBIENT_FIRE_BASE + 2.0 * AMBIENT_FIRE_PER_LEVEL)).abs() < 1e-10);
    }

    #[test]
    fn test_flyer_count() {
        assert_eq!(Difficulty::for_level(1).flyer_count(), 0);
        assert_eq!(Difficulty::for_level(3).flyer_count(), 0);
        assert_eq!(Difficulty::for_level(4).flyer_count(), 2);
        assert_eq!(Difficulty::for_level(5).flyer_count(), 3);
        assert_eq!(Difficulty::for_level(10).flyer_count(), 5);
        assert_eq!(Difficulty::for_level(40).flyer_count(), 5);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
            GamePhase::Victory,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let kinds = vec![
            EnemyKind::Squid,
            EnemyKind::Worm { base_y: 100.0 },
            EnemyKind::Spider {
                base_y: 100.0,
                state: SpiderState::Attacking,
                timer: 12.5,
            },
            EnemyKind::Flyer,
            EnemyKind::Boss {
                variant: BossVariant::Construct,
                max_health: 600.0,
                health: 420.0,
                attack: BossAttack::Sweep,
                attack_frame: 12,
            },
        ];
        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartRun,
            PlayerCommand::StartLevel { level: 7 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            GameEvent::ScoreChanged { score: 420 },
            GameEvent::LivesChanged { lives: 2 },
            GameEvent::PlayerHit,
            GameEvent::LevelComplete,
            GameEvent::GameOver,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }

        let audio = vec![
            AudioEvent::Shoot,
            AudioEvent::ChargeTick { ratio: 0.5 },
            AudioEvent::LaserBlast { ratio: 1.0 },
        ];
        for event in &audio {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_input_state_default() {
        let input = InputState::default();
        assert!(!input.left && !input.right && !input.fire);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.frame, back.frame);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_tint_hex_format() {
        for tint in [Tint::Player, Tint::Squid, Tint::BeamGlow, Tint::White] {
            let hex = tint.hex();
            assert!(hex.starts_with('#') && hex.len() == 7, "bad hex: {hex}");
        }
    }
}
