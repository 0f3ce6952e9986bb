//! The player save record: an element-tree text format with a `Stats`
//! section followed by the inventory and quest ledgers.
//!
//! The writer emits a stable, pretty-printed tree; the reader accepts the
//! same tree with any whitespace, comments, or a leading declaration. Any
//! reader failure discards the partial result and substitutes the default
//! player, carrying the reason for diagnostics.

use crate::entities::player::Player;
use crate::world::catalog::{ItemId, LocationId, QuestId};

/// Result of reading a save record. A malformed record is not an error at
/// this level: the contract is "any failure starts a new game", with the
/// failure reason kept inspectable instead of thrown away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Player),
    Defaulted { player: Player, reason: String },
}

impl LoadOutcome {
    pub fn into_player(self) -> Player {
        match self {
            LoadOutcome::Loaded(player) => player,
            LoadOutcome::Defaulted { player, .. } => player,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, LoadOutcome::Defaulted { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Defaulted { reason, .. } => Some(reason),
        }
    }
}

/// Renders the record tree. Stats field order and ledger entry order are
/// part of the on-disk schema and must stay in step with `player_from_record`.
pub fn player_to_record(player: &Player) -> String {
    let mut lines = Vec::new();
    lines.push("<Player>".to_string());
    lines.push("  <Stats>".to_string());
    lines.push(format!(
        "    <CurrentHitPoints>{}</CurrentHitPoints>",
        player.current_hit_points()
    ));
    lines.push(format!(
        "    <MaximumHitPoints>{}</MaximumHitPoints>",
        player.maximum_hit_points()
    ));
    lines.push(format!("    <Gold>{}</Gold>", player.gold()));
    lines.push(format!(
        "    <ExperiencePoints>{}</ExperiencePoints>",
        player.experience_points()
    ));
    lines.push(format!(
        "    <CurrentLocation>{}</CurrentLocation>",
        player.current_location.0
    ));
    if let Some(weapon) = player.current_weapon {
        lines.push(format!("    <CurrentWeapon>{}</CurrentWeapon>", weapon.0));
    }
    lines.push("  </Stats>".to_string());

    lines.push("  <InventoryItems>".to_string());
    for entry in player.inventory.entries() {
        lines.push(format!(
            "    <InventoryItem ID=\"{}\" Quantity=\"{}\"/>",
            entry.item.0, entry.quantity
        ));
    }
    lines.push("  </InventoryItems>".to_string());

    lines.push("  <PlayerQuests>".to_string());
    for entry in player.quest_log.entries() {
        lines.push(format!(
            "    <PlayerQuest ID=\"{}\" IsCompleted=\"{}\"/>",
            entry.quest.0, entry.completed
        ));
    }
    lines.push("  </PlayerQuests>".to_string());
    lines.push("</Player>".to_string());
    lines.join("\n")
}

pub fn player_from_record(data: &str) -> LoadOutcome {
    match parse_player(data) {
        Ok(player) => LoadOutcome::Loaded(player),
        Err(reason) => LoadOutcome::Defaulted {
            player: Player::create_default(),
            reason,
        },
    }
}

fn parse_player(data: &str) -> Result<Player, String> {
    let root = parse_document(data)?;
    if root.name != "Player" {
        return Err(format!("record root is <{}>, expected <Player>", root.name));
    }

    let stats = root.require_child("Stats")?;
    let current_hit_points = parse_i32(stats.require_text("CurrentHitPoints")?, "CurrentHitPoints")?;
    let maximum_hit_points = parse_i32(stats.require_text("MaximumHitPoints")?, "MaximumHitPoints")?;
    let gold = parse_i32(stats.require_text("Gold")?, "Gold")?;
    let experience_points = parse_i32(stats.require_text("ExperiencePoints")?, "ExperiencePoints")?;

    let mut player = Player::new(current_hit_points, maximum_hit_points, gold, experience_points);
    player.current_location = LocationId(parse_u32(
        stats.require_text("CurrentLocation")?,
        "CurrentLocation",
    )?);
    if let Some(weapon) = stats.child("CurrentWeapon") {
        player.current_weapon = Some(ItemId(parse_u32(&weapon.text, "CurrentWeapon")?));
    }

    // Inventory entries replay through the single-add path, one unit at a
    // time, so the merge rule owns consolidation and ordering.
    if let Some(items) = root.child("InventoryItems") {
        for node in items.children_named("InventoryItem") {
            let id = ItemId(parse_u32(node.require_attribute("ID")?, "InventoryItem ID")?);
            let quantity = parse_i32(
                node.require_attribute("Quantity")?,
                "InventoryItem Quantity",
            )?;
            for _ in 0..quantity {
                player.add_item_to_inventory(id);
            }
        }
    }

    if let Some(quests) = root.child("PlayerQuests") {
        for node in quests.children_named("PlayerQuest") {
            let id = QuestId(parse_u32(node.require_attribute("ID")?, "PlayerQuest ID")?);
            let completed = parse_bool(
                node.require_attribute("IsCompleted")?,
                "PlayerQuest IsCompleted",
            )?;
            player.quest_log.push_saved(id, completed);
        }
    }

    Ok(player)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    fn require_child(&self, name: &str) -> Result<&Element, String> {
        self.child(name)
            .ok_or_else(|| format!("record node <{}> missing under <{}>", name, self.name))
    }

    fn require_text(&self, name: &str) -> Result<&str, String> {
        Ok(&self.require_child(name)?.text)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn require_attribute(&self, name: &str) -> Result<&str, String> {
        self.attribute(name)
            .ok_or_else(|| format!("record attribute {} missing on <{}>", name, self.name))
    }
}

fn parse_document(data: &str) -> Result<Element, String> {
    let mut reader = Reader::new(data);
    reader.skip_whitespace();
    if reader.eat("<?") {
        reader.skip_past("?>")?;
    }
    loop {
        reader.skip_whitespace();
        if reader.rest().starts_with("<!--") {
            reader.skip_past("-->")?;
            continue;
        }
        break;
    }
    let root = parse_element(&mut reader)?;
    loop {
        reader.skip_whitespace();
        if reader.rest().starts_with("<!--") {
            reader.skip_past("-->")?;
            continue;
        }
        break;
    }
    if !reader.eof() {
        return Err(format!(
            "record has trailing content at offset {}",
            reader.pos
        ));
    }
    Ok(root)
}

fn parse_element(reader: &mut Reader) -> Result<Element, String> {
    reader.expect("<")?;
    let name = reader.read_name()?.to_string();
    let mut element = Element {
        name,
        ..Element::default()
    };

    loop {
        reader.skip_whitespace();
        if reader.eat("/>") {
            return Ok(element);
        }
        if reader.eat(">") {
            break;
        }
        let attr_name = reader.read_name()?.to_string();
        reader.skip_whitespace();
        reader.expect("=")?;
        reader.skip_whitespace();
        let quote = if reader.eat("\"") {
            '"'
        } else if reader.eat("'") {
            '\''
        } else {
            return Err(format!(
                "record attribute {} is missing a quoted value at offset {}",
                attr_name, reader.pos
            ));
        };
        let raw = reader.read_until(quote)?;
        element.attributes.push((attr_name, decode_entities(raw)?));
    }

    let mut text = String::new();
    loop {
        if reader.eat("</") {
            let close = reader.read_name()?;
            if close != element.name {
                return Err(format!(
                    "record close tag </{}> does not match <{}>",
                    close, element.name
                ));
            }
            reader.skip_whitespace();
            reader.expect(">")?;
            element.text = text.trim().to_string();
            return Ok(element);
        }
        if reader.rest().starts_with("<!--") {
            reader.skip_past("-->")?;
            continue;
        }
        if reader.rest().starts_with('<') {
            let child = parse_element(reader)?;
            element.children.push(child);
            continue;
        }
        if reader.eof() {
            return Err(format!("record ended inside <{}>", element.name));
        }
        let run = reader.read_text_run();
        text.push_str(&decode_entities(run)?);
    }
}

struct Reader<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.data[self.pos..]
    }

    fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.rest().chars().next() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            return true;
        }
        false
    }

    fn expect(&mut self, token: &str) -> Result<(), String> {
        if self.eat(token) {
            return Ok(());
        }
        Err(format!(
            "record expected '{}' at offset {}",
            token, self.pos
        ))
    }

    fn skip_past(&mut self, token: &str) -> Result<(), String> {
        match self.rest().find(token) {
            Some(index) => {
                self.pos += index + token.len();
                Ok(())
            }
            None => Err(format!("record is missing '{}'", token)),
        }
    }

    fn read_name(&mut self) -> Result<&'a str, String> {
        let start = self.pos;
        while let Some(ch) = self.rest().chars().next() {
            if !(ch.is_alphanumeric() || ch == '_' || ch == '-') {
                break;
            }
            self.pos += ch.len_utf8();
        }
        if self.pos == start {
            return Err(format!("record name expected at offset {}", self.pos));
        }
        Ok(&self.data[start..self.pos])
    }

    /// Consumes up to and including `stop`, returning the run before it.
    fn read_until(&mut self, stop: char) -> Result<&'a str, String> {
        match self.rest().find(stop) {
            Some(index) => {
                let run = &self.data[self.pos..self.pos + index];
                self.pos += index + stop.len_utf8();
                Ok(run)
            }
            None => Err(format!(
                "record has an unterminated value at offset {}",
                self.pos
            )),
        }
    }

    fn read_text_run(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}

fn decode_entities(raw: &str) -> Result<String, String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(index) = rest.find('&') {
        decoded.push_str(&rest[..index]);
        rest = &rest[index + 1..];
        let Some(end) = rest.find(';') else {
            return Err("record has an unterminated entity".to_string());
        };
        let name = &rest[..end];
        decoded.push(match name {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            other => return Err(format!("record has an unknown entity '&{};'", other)),
        });
        rest = &rest[end + 1..];
    }
    decoded.push_str(rest);
    Ok(decoded)
}

fn parse_i32(value: &str, label: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("record field {} is not a number: '{}'", label, value))
}

fn parse_u32(value: &str, label: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("record field {} is not an id: '{}'", label, value))
}

fn parse_bool(value: &str, label: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!(
            "record field {} is not a boolean: '{}'",
            label, value
        )),
    }
}
