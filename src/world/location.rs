use crate::items::Shop;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Location {
    Village,
    Blacksmith,
    Market,
    Forest,
    #[strum(to_string = "Dragon Cave")]
    DragonCave,
}

/// One numbered menu entry. Every handler the game loop can run is listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Travel(Location),
    Browse(Shop),
    Hunt,
    FightDragon,
    Status,
    UseItem,
    Help,
    Quit,
}

const VILLAGE_MENU: [Action; 8] = [
    Action::Travel(Location::Blacksmith),
    Action::Travel(Location::Market),
    Action::Travel(Location::Forest),
    Action::Travel(Location::DragonCave),
    Action::Status,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const BLACKSMITH_MENU: [Action; 6] = [
    Action::Browse(Shop::Blacksmith),
    Action::Travel(Location::Village),
    Action::Status,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const MARKET_MENU: [Action; 6] = [
    Action::Browse(Shop::Market),
    Action::Travel(Location::Village),
    Action::Status,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const FOREST_MENU: [Action; 5] = [
    Action::Hunt,
    Action::Travel(Location::Village),
    Action::Status,
    Action::UseItem,
    Action::Quit,
];

const DRAGON_CAVE_MENU: [Action; 6] = [
    Action::FightDragon,
    Action::Travel(Location::Village),
    Action::Status,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

impl Location {
    /// The numbered actions offered here, in display order.
    pub fn menu(self) -> &'static [Action] {
        match self {
            Location::Village => &VILLAGE_MENU,
            Location::Blacksmith => &BLACKSMITH_MENU,
            Location::Market => &MARKET_MENU,
            Location::Forest => &FOREST_MENU,
            Location::DragonCave => &DRAGON_CAVE_MENU,
        }
    }

    /// Looks up the action behind a 0-based menu index.
    pub fn action(self, index: usize) -> Option<Action> {
        self.menu().get(index).copied()
    }

    pub fn description(self) -> &'static str {
        match self {
            Location::Village => {
                "Smoke curls from the chimneys of a quiet village. Roads lead to the \
                 blacksmith, the market, the forest and, far up the mountain, a cave."
            }
            Location::Blacksmith => {
                "The forge roars. The blacksmith wipes their hands and nods at the \
                 weapons and armor on the wall."
            }
            Location::Market => {
                "Stalls crowd the square. Merchants call out their prices for potions \
                 and supplies."
            }
            Location::Forest => {
                "Tall trees swallow the daylight. Something moves between the trunks."
            }
            Location::DragonCave => {
                "Heat rolls out of the cave mouth. Bones crunch underfoot, and deep \
                 inside something enormous breathes."
            }
        }
    }
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::Travel(Location::Village) => "Return to the village".to_string(),
            Action::Travel(Location::Forest) => "Venture into the forest".to_string(),
            Action::Travel(Location::DragonCave) => "Climb to the dragon's cave".to_string(),
            Action::Travel(to) => format!("Visit the {}", to),
            Action::Browse(_) => "Browse the wares".to_string(),
            Action::Hunt => "Hunt for another monster".to_string(),
            Action::FightDragon => "Fight the dragon".to_string(),
            Action::Status => "Check your status".to_string(),
            Action::UseItem => "Use an item".to_string(),
            Action::Help => "Help".to_string(),
            Action::Quit => "Quit the game".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_menu_sizes() {
        assert_eq!(Location::Village.menu().len(), 8);
        assert_eq!(Location::Blacksmith.menu().len(), 6);
        assert_eq!(Location::Market.menu().len(), 6);
        assert_eq!(Location::Forest.menu().len(), 5);
        assert_eq!(Location::DragonCave.menu().len(), 6);
    }

    #[test]
    fn test_every_menu_can_quit() {
        for location in Location::iter() {
            assert!(
                location.menu().contains(&Action::Quit),
                "{location} has no quit option"
            );
        }
    }

    #[test]
    fn test_every_location_leads_home() {
        for location in Location::iter().filter(|l| *l != Location::Village) {
            assert!(location
                .menu()
                .contains(&Action::Travel(Location::Village)));
        }
    }

    #[test]
    fn test_village_reaches_every_other_location() {
        for location in Location::iter().filter(|l| *l != Location::Village) {
            assert!(Location::Village
                .menu()
                .contains(&Action::Travel(location)));
        }
    }

    #[test]
    fn test_action_lookup() {
        assert_eq!(
            Location::Village.action(2),
            Some(Action::Travel(Location::Forest))
        );
        assert_eq!(Location::Forest.action(0), Some(Action::Hunt));
        assert_eq!(Location::Forest.action(5), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Location::DragonCave.to_string(), "Dragon Cave");
        assert_eq!(Location::Market.to_string(), "Market");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Action::Travel(Location::Blacksmith).label(),
            "Visit the Blacksmith"
        );
        assert_eq!(
            Action::Travel(Location::Village).label(),
            "Return to the village"
        );
    }
}
