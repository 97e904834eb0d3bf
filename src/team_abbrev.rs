//TODO drop the lookup once every season file carries a team code

/// Map team nickname to team abbreviation
///
/// This function maps team nicknames (e.g., "Celtics")
/// to their standard 3-letter abbreviations (e.g., "BOS").
pub fn nickname_to_abbrev(nickname: &str) -> Option<&'static str> {
    match nickname {
        "Hawks" => Some("ATL"),
        "Celtics" => Some("BOS"),
        "Nets" => Some("BKN"),
        "Hornets" => Some("CHA"),
        "Bulls" => Some("CHI"),
        "Cavaliers" => Some("CLE"),
        "Mavericks" => Some("DAL"),
        "Nuggets" => Some("DEN"),
        "Pistons" => Some("DET"),
        "Warriors" => Some("GSW"),
        "Rockets" => Some("HOU"),
        "Pacers" => Some("IND"),
        "Clippers" => Some("LAC"),
        "Lakers" => Some("LAL"),
        "Grizzlies" => Some("MEM"),
        "Heat" => Some("MIA"),
        "Bucks" => Some("MIL"),
        "Timberwolves" => Some("MIN"),
        "Pelicans" => Some("NOP"),
        "Knicks" => Some("NYK"),
        "Thunder" => Some("OKC"),
        "Magic" => Some("ORL"),
        "76ers" => Some("PHI"),
        "Suns" => Some("PHX"),
        "Trail Blazers" => Some("POR"),
        "Kings" => Some("SAC"),
        "Spurs" => Some("SAS"),
        "Raptors" => Some("TOR"),
        "Jazz" => Some("UTA"),
        "Wizards" => Some("WAS"),
        // Historical teams
        "SuperSonics" => Some("SEA"),
        "Bobcats" => Some("CHA"),
        _ => None,
    }
}

/// Derive a display code for a team that arrived without one.
///
/// Tries the nickname, then the trailing one or two words of the full name,
/// and finally falls back to the first three letters of the name.
pub fn derive_code(nickname: Option<&str>, name: &str) -> String {
    if let Some(abbrev) = nickname.map(str::trim).and_then(nickname_to_abbrev) {
        return abbrev.to_string();
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let tails = [
        words.len().checked_sub(2).map(|i| words[i..].join(" ")),
        words.last().map(|w| w.to_string()),
    ];
    for tail in tails.iter().flatten() {
        if let Some(abbrev) = nickname_to_abbrev(tail) {
            return abbrev.to_string();
        }
    }

    name.chars()
        .filter(|c| c.is_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}
