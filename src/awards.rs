//! Season-by-season award winners. Pure reference data maintained by hand;
//! the award categories are not derivable from the two loaded tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonAwards {
    pub season: i32,
    pub winner: &'static str,
    pub runner_up: &'static str,
    pub player_of_series: &'static str,
    pub purple_cap: &'static str,
    pub emerging_player: &'static str,
}

pub const SEASON_AWARDS: [SeasonAwards; 17] = [
    SeasonAwards {
        season: 2008,
        winner: "RR",
        runner_up: "CSK",
        player_of_series: "Shane Watson",
        purple_cap: "Sohail Tanvir",
        emerging_player: "Shreevats Goswami",
    },
    SeasonAwards {
        season: 2009,
        winner: "DEC",
        runner_up: "RCB",
        player_of_series: "Adam Gilchrist",
        purple_cap: "RP Singh",
        emerging_player: "Rohit Sharma",
    },
    SeasonAwards {
        season: 2010,
        winner: "CSK",
        runner_up: "MI",
        player_of_series: "Sachin Tendulkar",
        purple_cap: "Pragyan Ojha",
        emerging_player: "Saurabh Tiwary",
    },
    SeasonAwards {
        season: 2011,
        winner: "CSK",
        runner_up: "RCB",
        player_of_series: "Chris Gayle",
        purple_cap: "Lasith Malinga",
        emerging_player: "Iqbal Abdulla",
    },
    SeasonAwards {
        season: 2012,
        winner: "KKR",
        runner_up: "CSK",
        player_of_series: "Sunil Narine",
        purple_cap: "Morné Morkel",
        emerging_player: "Mandeep Singh",
    },
    SeasonAwards {
        season: 2013,
        winner: "MI",
        runner_up: "CSK",
        player_of_series: "Shane Watson",
        purple_cap: "Dwayne Bravo",
        emerging_player: "Sanju Samson",
    },
    SeasonAwards {
        season: 2014,
        winner: "KKR",
        runner_up: "KXIP",
        player_of_series: "Glenn Maxwell",
        purple_cap: "Mohit Sharma",
        emerging_player: "Axar Patel",
    },
    SeasonAwards {
        season: 2015,
        winner: "MI",
        runner_up: "CSK",
        player_of_series: "Andre Russell",
        purple_cap: "Dwayne Bravo",
        emerging_player: "Shreyas Iyer",
    },
    SeasonAwards {
        season: 2016,
        winner: "SRH",
        runner_up: "RCB",
        player_of_series: "Virat Kohli",
        purple_cap: "Bhuvneshwar Kumar",
        emerging_player: "Mustafizur Rahman",
    },
    SeasonAwards {
        season: 2017,
        winner: "MI",
        runner_up: "RPSG",
        player_of_series: "Ben Stokes",
        purple_cap: "Bhuvneshwar Kumar",
        emerging_player: "Basil Thampi",
    },
    SeasonAwards {
        season: 2018,
        winner: "CSK",
        runner_up: "SRH",
        player_of_series: "Sunil Narine",
        purple_cap: "Andrew Tye",
        emerging_player: "Rishabh Pant",
    },
    SeasonAwards {
        season: 2019,
        winner: "MI",
        runner_up: "CSK",
        player_of_series: "Andre Russell",
        purple_cap: "Imran Tahir",
        emerging_player: "Shubman Gill",
    },
    SeasonAwards {
        season: 2020,
        winner: "MI",
        runner_up: "DC",
        player_of_series: "Jofra Archer",
        purple_cap: "Kagiso Rabada",
        emerging_player: "Devdutt Padikkal",
    },
    SeasonAwards {
        season: 2021,
        winner: "CSK",
        runner_up: "KKR",
        player_of_series: "Harshal Patel",
        purple_cap: "Harshal Patel",
        emerging_player: "Ruturaj Gaikwad",
    },
    SeasonAwards {
        season: 2022,
        winner: "GT",
        runner_up: "RR",
        player_of_series: "Jos Buttler",
        purple_cap: "Yuzvendra Chahal",
        emerging_player: "Umran Malik",
    },
    SeasonAwards {
        season: 2023,
        winner: "CSK",
        runner_up: "GT",
        player_of_series: "Shubman Gill",
        purple_cap: "Mohammed Shami",
        emerging_player: "Yashasvi Jaiswal",
    },
    SeasonAwards {
        season: 2024,
        winner: "KKR",
        runner_up: "SRH",
        player_of_series: "Sunil Narine",
        purple_cap: "Harshal Patel",
        emerging_player: "Nitish Kumar Reddy",
    },
];

pub fn for_season(season: i32) -> Option<&'static SeasonAwards> {
    SEASON_AWARDS.iter().find(|s| s.season == season)
}

/// The most recent season on record, the selector default.
pub fn latest() -> &'static SeasonAwards {
    &SEASON_AWARDS[SEASON_AWARDS.len() - 1]
}
