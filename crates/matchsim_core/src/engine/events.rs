use super::config::GeneratorConfig;
use super::dice::Dice;
use crate::error::Result;
use crate::models::{EventKind, MatchEvent, Side, TeamSheet};

/// Decides, once per tick, whether something happens on the pitch.
///
/// Draw order per tick: event chance, kind, side, actor. The generator is a
/// pure function of `(minute, rosters, dice state)`; it does not look at
/// ratings, formation or mentality.
#[derive(Debug, Clone)]
pub struct EventGenerator {
    config: GeneratorConfig,
}

impl EventGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<D: Dice + ?Sized>(
        &self,
        minute: u8,
        home: &TeamSheet,
        away: &TeamSheet,
        dice: &mut D,
    ) -> Option<MatchEvent> {
        if !dice.chance(self.config.event_probability) {
            return None;
        }

        let kinds = &self.config.enabled_kinds;
        let kind = kinds[dice.pick(kinds.len())];
        let side = if dice.chance(self.config.home_bias) { Side::Home } else { Side::Away };
        let team = match side {
            Side::Home => home,
            Side::Away => away,
        };

        let event = match kind {
            EventKind::Goal => MatchEvent::goal(minute, side, pick_actor(team, dice)),
            _ => {
                let actor =
                    if self.config.name_all_actors { pick_actor(team, dice) } else { None };
                MatchEvent::incident(minute, kind, side, actor)
            }
        };
        Some(event)
    }
}

fn pick_actor<D: Dice + ?Sized>(team: &TeamSheet, dice: &mut D) -> Option<String> {
    if team.roster.is_empty() {
        return None;
    }
    team.player(dice.pick(team.roster.len())).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dice::ScriptedDice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sheets() -> (TeamSheet, TeamSheet) {
        (
            TeamSheet::from_roster("Home", ["Haaland", "De Bruyne"]),
            TeamSheet::from_roster("Away", ["Kane", "Son"]),
        )
    }

    fn generator() -> EventGenerator {
        EventGenerator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_no_event_when_chance_misses() {
        let (home, away) = sheets();
        let mut dice = ScriptedDice::new().with_chances([false]).with_picks([3]);
        assert!(generator().generate(5, &home, &away, &mut dice).is_none());
        // Nothing beyond the event chance was consumed.
        assert_eq!(dice.pick(10), 3);
    }

    #[test]
    fn test_home_goal_names_scorer() {
        let (home, away) = sheets();
        // fires, kind = Goal (index 0), home side, scorer index 0
        let mut dice = ScriptedDice::new().with_chances([true, true]).with_picks([0, 0]);
        let event = generator().generate(12, &home, &away, &mut dice).unwrap();

        assert_eq!(event.minute, 12);
        assert_eq!(event.kind, EventKind::Goal);
        assert_eq!(event.side, Side::Home);
        assert_eq!(event.actor.as_deref(), Some("Haaland"));
        assert_eq!(event.description, "Goal! Haaland scores!");
    }

    #[test]
    fn test_away_goal_uses_away_roster() {
        let (home, away) = sheets();
        let mut dice = ScriptedDice::new().with_chances([true, false]).with_picks([0, 1]);
        let event = generator().generate(67, &home, &away, &mut dice).unwrap();
        assert_eq!(event.side, Side::Away);
        assert_eq!(event.actor.as_deref(), Some("Son"));
    }

    #[test]
    fn test_card_has_no_actor_by_default() {
        let (home, away) = sheets();
        // kind index 1 = YellowCard in the default set
        let mut dice = ScriptedDice::new().with_chances([true, false]).with_picks([1]);
        let event = generator().generate(28, &home, &away, &mut dice).unwrap();
        assert_eq!(event.kind, EventKind::YellowCard);
        assert_eq!(event.description, "Yellow card");
        assert!(event.actor.is_none());
    }

    #[test]
    fn test_named_actors_for_incidents() {
        let (home, away) = sheets();
        let config = GeneratorConfig {
            enabled_kinds: vec![EventKind::Injury],
            name_all_actors: true,
            ..Default::default()
        };
        let generator = EventGenerator::new(config).unwrap();
        let mut dice = ScriptedDice::new().with_chances([true, true]).with_picks([0, 1]);
        let event = generator.generate(40, &home, &away, &mut dice).unwrap();
        assert_eq!(event.kind, EventKind::Injury);
        assert_eq!(event.actor.as_deref(), Some("De Bruyne"));
        assert_eq!(event.description, "Injury");
    }

    #[test]
    fn test_empty_roster_goal() {
        let home = TeamSheet::new("Home", vec![]);
        let away = TeamSheet::new("Away", vec![]);
        let mut dice = ScriptedDice::new().with_chances([true, true]).with_picks([0]);
        let event = generator().generate(3, &home, &away, &mut dice).unwrap();
        assert_eq!(event.kind, EventKind::Goal);
        assert!(event.actor.is_none());
        assert_eq!(event.description, "Goal!");
    }

    #[test]
    fn test_never_draws_whistles() {
        let (home, away) = sheets();
        let config = GeneratorConfig { event_probability: 1.0, ..Default::default() };
        let generator = EventGenerator::new(config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for minute in 1..=90 {
            let event = generator.generate(minute, &home, &away, &mut rng).unwrap();
            assert!(!event.kind.is_whistle());
            assert!(generator.config().enabled_kinds.contains(&event.kind));
            assert_eq!(event.minute, minute);
        }
    }

    #[test]
    fn test_same_seed_same_events() {
        let (home, away) = sheets();
        let config = GeneratorConfig { event_probability: 0.5, ..Default::default() };
        let generator = EventGenerator::new(config).unwrap();

        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (1..=90).filter_map(|m| generator.generate(m, &home, &away, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GeneratorConfig { home_bias: 2.0, ..Default::default() };
        assert!(EventGenerator::new(config).is_err());
    }
}
