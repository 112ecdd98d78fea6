//! Arena v2 technical deck - Castle Crashers edition
//!
//! Ten slides covering the single-game redesign: combat mechanics, bot AI,
//! ELO ranking, the live leaderboard, betting, architecture, and roadmap.
//! All slides after the title share the header/footer chrome.

use crate::command::{Font, Page, PAGE_HEIGHT as H, PAGE_WIDTH as W};
use clawkit_core::Color;

/// Document title
pub const TITLE: &str = "Clawdbot Arena v2 - Castle Crashers Edition";
/// Default output filename
pub const DEFAULT_OUTPUT: &str = "Clawdbot_Arena_v2_Presentation.pdf";

mod palette {
    use clawkit_core::Color;

    pub const DARK_BG: Color = Color::hex(0x0A0A0F);
    pub const CARD_BG: Color = Color::hex(0x12121A);
    pub const PURPLE: Color = Color::hex(0x8B5CF6);
    pub const CYAN: Color = Color::hex(0x06B6D4);
    pub const GREEN: Color = Color::hex(0x10B981);
    pub const RED: Color = Color::hex(0xEF4444);
    pub const ORANGE: Color = Color::hex(0xF59E0B);
    pub const WHITE: Color = Color::hex(0xE4E4E7);
    pub const GRAY: Color = Color::hex(0x71717A);
}

use palette::*;

/// Shared slide chrome: background, header bar, page number, footer
fn slide_chrome(page: &mut Page, page_num: u32, title: &str, subtitle: Option<&str>) {
    page.fill_rect(0.0, 0.0, W, H, DARK_BG);
    page.round_rect(30.0, H - 80.0, W - 60.0, 60.0, 10.0, CARD_BG);

    page.text(50.0, H - 60.0, title, Font::HelveticaBold, 28.0, WHITE);
    if let Some(subtitle) = subtitle {
        page.text(50.0, H - 75.0, subtitle, Font::Helvetica, 14.0, GRAY);
    }

    page.text_right(W - 50.0, 30.0, page_num.to_string(), Font::HelveticaBold, 12.0, PURPLE);
    page.text(
        50.0,
        30.0,
        "Clawdbot Arena v2 | Castle Crashers Edition",
        Font::Helvetica,
        10.0,
        GRAY,
    );
}

fn slide_title(page: &mut Page) {
    page.fill_rect(0.0, 0.0, W, H, DARK_BG);
    page.fill_rect(0.0, H / 2.0 - 80.0, W, 160.0, PURPLE);

    page.text_centered(W / 2.0, H / 2.0 + 30.0, "CLAWDBOT ARENA v2", Font::HelveticaBold, 48.0, WHITE);
    page.text_centered(
        W / 2.0,
        H / 2.0 - 20.0,
        "Castle Crashers-Style Beat 'Em Up",
        Font::HelveticaBold,
        24.0,
        WHITE,
    );
    page.text_centered(
        W / 2.0,
        H / 2.0 - 60.0,
        "AI Bots Battle. You Bet. Ranks Rise.",
        Font::Helvetica,
        18.0,
        CYAN,
    );

    page.text_centered(
        W / 2.0,
        80.0,
        "Powered by OpenBOR-WASM | ELO Ranking | Live Leaderboard | $COMP Betting",
        Font::Helvetica,
        12.0,
        GRAY,
    );
    page.text_centered(W / 2.0, 60.0, "February 2026", Font::Helvetica, 12.0, GRAY);
}

fn slide_overview(page: &mut Page) {
    slide_chrome(page, 2, "What is Clawdbot Arena v2?", Some("The Evolution"));

    let mut y = H - 130.0;
    page.text(
        80.0,
        y,
        "Clawdbot Arena v2 transforms the platform into a focused, single-game experience:",
        Font::Helvetica,
        16.0,
        WHITE,
    );
    y -= 60.0;

    let highlights = [
        ("ONE GAME:", "Castle Crashers-style 2D beat 'em up arena battles"),
        ("AI VS AI:", "Clawdbots develop their own combat strategies in real-time"),
        ("ELO RANKING:", "Wins rank you up, losses rank you down"),
        ("LIVE BETTING:", "Bet $COMP tokens on match outcomes"),
        ("REAL-TIME:", "60 FPS combat with 100ms decision windows"),
    ];
    for (lead, rest) in highlights {
        page.text(80.0, y, lead, Font::HelveticaBold, 16.0, PURPLE);
        page.text(230.0, y, rest, Font::Helvetica, 16.0, WHITE);
        y -= 30.0;
    }

    page.round_rect(500.0, 120.0, 280.0, 150.0, 10.0, CARD_BG);
    page.text(520.0, 245.0, "Powered By", Font::HelveticaBold, 14.0, ORANGE);
    let powered = [
        "OpenBOR-WASM (20+ years mature)",
        "WebAssembly for browser play",
        "Castle Crashers combat system",
        "Combos, juggling, magic built-in",
        "60 FPS real-time battles",
    ];
    for (i, line) in powered.iter().enumerate() {
        page.text(520.0, 220.0 - i as f32 * 20.0, *line, Font::Helvetica, 12.0, WHITE);
    }
}

fn slide_game_mechanics(page: &mut Page) {
    slide_chrome(page, 3, "Combat Mechanics", Some("Castle Crashers-Style Fighting"));

    let mut y = H - 130.0;
    page.text(80.0, y, "Bot Actions (60x per second)", Font::HelveticaBold, 16.0, ORANGE);
    y -= 30.0;

    let actions = [
        ("MOVE", "Walk left/right, approach or retreat"),
        ("JUMP", "Jump for aerial attacks or evasion"),
        ("LIGHT ATTACK", "Fast strikes, start combos"),
        ("HEAVY ATTACK", "Slow but powerful, launches enemies"),
        ("BLOCK", "Reduce incoming damage"),
        ("MAGIC", "Powerful special attacks (costs meter)"),
    ];
    for (action, desc) in actions {
        page.text(100.0, y, action, Font::Helvetica, 13.0, CYAN);
        page.text(240.0, y, desc, Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    y -= 20.0;
    page.text(80.0, y, "Combo System", Font::HelveticaBold, 16.0, ORANGE);
    y -= 30.0;

    let combos = [
        ("LLLL", "Quick Strikes - Fast damage"),
        ("LLLH", "Launcher - Pops enemy into air"),
        ("HH", "Spin Attack - Hits both sides"),
        ("Air LLH", "Air Slam - Ground bounce"),
        ("LLM", "Magic Combo - Elemental burst"),
    ];
    for (combo, desc) in combos {
        page.text(100.0, y, combo, Font::HelveticaBold, 13.0, GREEN);
        page.text(200.0, y, desc, Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    page.round_rect(500.0, 120.0, 280.0, 200.0, 10.0, CARD_BG);
    page.text(520.0, 295.0, "Match Format", Font::HelveticaBold, 14.0, RED);
    let format = [
        "Best of 3 rounds",
        "99 seconds per round",
        "1000 HP per fighter",
        "KO or timeout wins round",
        "30 sec betting window",
        "ELO updated after match",
    ];
    for (i, line) in format.iter().enumerate() {
        page.text(520.0, 270.0 - i as f32 * 20.0, *line, Font::Helvetica, 12.0, WHITE);
    }
}

fn slide_bot_ai(page: &mut Page) {
    slide_chrome(page, 4, "Bot AI System", Some("How Clawdbots Develop Strategies"));

    let mut y = H - 130.0;
    page.text(
        80.0,
        y,
        "Every Frame (60 FPS), Bots Receive:",
        Font::HelveticaBold,
        16.0,
        CYAN,
    );
    y -= 30.0;

    let observations = [
        "Self: health, position, state, magic meter",
        "Opponent: health, position, state, vulnerability",
        "Spatial: distance, attack range, wall proximity",
        "Tactical: health advantage, time remaining, round score",
        "Valid actions available this frame",
    ];
    for obs in observations {
        page.text(100.0, y, format!("  {obs}"), Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    y -= 20.0;
    page.text(
        80.0,
        y,
        "Bots Must Decide (100ms window):",
        Font::HelveticaBold,
        16.0,
        ORANGE,
    );
    y -= 30.0;

    let decisions = [
        "When to attack vs when to defend",
        "How to start and extend combos",
        "When to use limited magic meter",
        "How to punish opponent's mistakes",
        "Whether to play aggressive or defensive",
    ];
    for dec in decisions {
        page.text(100.0, y, format!("  {dec}"), Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    page.round_rect(500.0, 100.0, 280.0, 120.0, 10.0, CARD_BG);
    page.text(520.0, 195.0, "Emergent Strategies", Font::HelveticaBold, 14.0, GREEN);
    let insight = [
        "Bots are NOT pre-programmed.",
        "They develop their own playstyles",
        "based on what works against",
        "different opponents.",
    ];
    for (i, line) in insight.iter().enumerate() {
        page.text(520.0, 170.0 - i as f32 * 20.0, *line, Font::Helvetica, 11.0, WHITE);
    }
}

fn slide_ranking(page: &mut Page) {
    slide_chrome(page, 5, "ELO Ranking System", Some("Competitive Progression"));

    let mut y = H - 130.0;
    page.text(
        80.0,
        y,
        "Every bot starts at 1200 ELO. Win to climb, lose to fall.",
        Font::Helvetica,
        14.0,
        WHITE,
    );
    y -= 40.0;

    page.text(80.0, y, "Rank Tiers", Font::HelveticaBold, 16.0, ORANGE);
    y -= 30.0;

    let tiers = [
        ("Champion", "2400+", 0xFFD700),
        ("Grandmaster", "2200-2399", 0xFF4444),
        ("Master", "2000-2199", 0x9966CC),
        ("Diamond", "1800-1999", 0xB9F2FF),
        ("Platinum", "1600-1799", 0xE5E4E2),
        ("Gold", "1400-1599", 0xFFD700),
        ("Silver", "1200-1399", 0xC0C0C0),
        ("Bronze", "0-1199", 0xCD7F32),
    ];
    for (tier, rating, color) in tiers {
        page.text(100.0, y, tier, Font::Helvetica, 13.0, Color::hex(color));
        page.text(220.0, y, rating, Font::Helvetica, 13.0, WHITE);
        y -= 20.0;
    }

    page.round_rect(400.0, 120.0, 360.0, 180.0, 10.0, CARD_BG);
    page.text(420.0, 275.0, "Matchmaking", Font::HelveticaBold, 14.0, CYAN);
    let rules = [
        "Search for opponents \u{B1}100 ELO",
        "Expand range by 50 every 10 sec",
        "Max range: \u{B1}500 ELO",
        "Max wait: 2 minutes",
    ];
    for (i, line) in rules.iter().enumerate() {
        page.text(420.0, 250.0 - i as f32 * 20.0, *line, Font::Helvetica, 12.0, WHITE);
    }
    page.text(
        420.0,
        160.0,
        "Fair fights = meaningful rankings",
        Font::HelveticaBold,
        12.0,
        ORANGE,
    );
}

fn slide_leaderboard(page: &mut Page) {
    slide_chrome(page, 6, "Live Leaderboard", Some("Real-Time Rankings"));

    let mut y = H - 130.0;
    page.text(80.0, y, "Features", Font::HelveticaBold, 16.0, WHITE);
    y -= 30.0;

    let features = [
        "Real-time updates via WebSocket",
        "Animated rank changes (slide up/down)",
        "Green flash on rank up, red on rank down",
        "'LIVE' badge for bots in active matches",
        "Search and filter by rank tier",
        "View any bot's full match history",
    ];
    for feat in features {
        page.text(120.0, y, feat, Font::Helvetica, 13.0, WHITE);
        y -= 25.0;
    }

    y -= 20.0;
    page.text(80.0, y, "Technical Implementation", Font::HelveticaBold, 16.0, ORANGE);
    y -= 30.0;

    let tech = [
        "Redis sorted sets for O(log N) ranking",
        "WebSocket broadcast on every ELO change",
        "Efficient delta updates (only changed ranks)",
        "Client-side animation for smooth UX",
    ];
    for line in tech {
        page.text(100.0, y, format!("  {line}"), Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    page.round_rect(480.0, 150.0, 290.0, 200.0, 10.0, CARD_BG);
    page.text(500.0, 325.0, "Sample Rankings", Font::HelveticaBold, 14.0, PURPLE);

    let rankings = [
        ("#1", "OmegaBot_Prime", "2,847"),
        ("#2", "NeuralDestroyer", "2,634"),
        ("#3", "CyberPunk_AI", "2,521"),
        ("#4", "AlphaStrike_v3", "2,187"),
        ("#5", "QuantumFist", "2,098"),
    ];
    let mut row_y = 295.0;
    for (rank, name, elo) in rankings {
        page.text(500.0, row_y, rank, Font::Helvetica, 11.0, ORANGE);
        page.text(540.0, row_y, name, Font::Helvetica, 11.0, WHITE);
        page.text(700.0, row_y, elo, Font::Helvetica, 11.0, CYAN);
        row_y -= 25.0;
    }
}

fn slide_betting(page: &mut Page) {
    slide_chrome(page, 7, "Betting System", Some("$COMP Token Integration"));

    let mut y = H - 130.0;
    page.text(80.0, y, "How Betting Works", Font::HelveticaBold, 16.0, WHITE);
    y -= 30.0;

    let steps = [
        "1. Match is created with 2 bots",
        "2. 30-second betting window opens",
        "3. Spectators bet $COMP on their pick",
        "4. Odds calculated pari-mutuel style",
        "5. Betting closes, match begins",
        "6. Winner determined, payouts distributed",
    ];
    for step in steps {
        page.text(100.0, y, step, Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    y -= 20.0;
    page.text(80.0, y, "Pari-Mutuel Odds", Font::HelveticaBold, 16.0, ORANGE);
    y -= 30.0;

    let odds = [
        "Odds = (Total Pool - House Edge) / Pool on Bot",
        "House Edge: 2.5% on winnings",
        "Real-time odds update as bets come in",
    ];
    for line in odds {
        page.text(100.0, y, line, Font::Helvetica, 13.0, WHITE);
        y -= 22.0;
    }

    page.round_rect(480.0, 150.0, 290.0, 180.0, 10.0, CARD_BG);
    page.text(500.0, 305.0, "Smart Contract", Font::HelveticaBold, 14.0, GREEN);
    let contract = [
        "BettingArena.sol on Base L2",
        "Contract holds funds as escrow",
        "Oracle confirms match results",
        "Winners claim directly",
        "2.5% to treasury",
        "Fully non-custodial",
    ];
    for (i, line) in contract.iter().enumerate() {
        page.text(500.0, 280.0 - i as f32 * 20.0, *line, Font::Helvetica, 11.0, WHITE);
    }
}

fn slide_architecture(page: &mut Page) {
    slide_chrome(page, 8, "Technical Architecture", Some("How It All Connects"));

    let mut y = H - 130.0;
    let components = [
        ("Frontend", "Next.js 14, Tailwind, wagmi/viem", CYAN),
        ("Game Engine", "OpenBOR-WASM (WebAssembly)", ORANGE),
        ("JS Bridge", "State extraction + input injection", GREEN),
        ("Ranking", "ELO system + Redis leaderboard", PURPLE),
        ("Betting", "BettingArena.sol on Base L2", RED),
        ("Real-time", "WebSocket for live updates", WHITE),
    ];
    for (comp, desc, color) in components {
        page.text(80.0, y, comp, Font::HelveticaBold, 14.0, color);
        page.text(200.0, y, desc, Font::Helvetica, 13.0, WHITE);
        y -= 30.0;
    }

    y -= 20.0;
    page.text(80.0, y, "Data Flow (Every Frame)", Font::HelveticaBold, 16.0, ORANGE);
    y -= 25.0;

    let flow = [
        "OpenBOR WASM \u{2192} extract state \u{2192} JS Bridge \u{2192} send observation",
        "Bot AI \u{2192} decide action (100ms)",
        "JS Bridge \u{2192} inject input \u{2192} OpenBOR",
        "Broadcast frame \u{2192} Spectators",
    ];
    for line in flow {
        page.text(100.0, y, line, Font::Helvetica, 12.0, WHITE);
        y -= 18.0;
    }
}

fn slide_roadmap(page: &mut Page) {
    slide_chrome(page, 9, "Implementation Roadmap", Some("5-Week Development Plan"));

    let mut y = H - 130.0;
    let phases: [(&str, &[&str], Color); 4] = [
        ("Week 1-2: OpenBOR Integration", &[
            "Set up OpenBOR-WASM in project",
            "Create JavaScript bridge layer",
            "Build custom arena game pak",
            "Test state extraction and input injection",
        ], CYAN),
        ("Week 2-3: Ranking System", &[
            "Implement ELO calculator",
            "Set up Redis for leaderboard",
            "Build ranked matchmaking",
            "Connect to match results",
        ], GREEN),
        ("Week 3-4: Frontend", &[
            "Create OpenBOR canvas component",
            "Build spectator view with health bars",
            "Implement live leaderboard",
            "Update arena/home pages",
        ], ORANGE),
        ("Week 4-5: Integration", &[
            "Connect to betting system",
            "Wire up WebSocket broadcasting",
            "End-to-end testing",
            "Performance optimization",
        ], PURPLE),
    ];

    for (phase, tasks, color) in phases {
        page.text(80.0, y, phase, Font::HelveticaBold, 14.0, color);
        y -= 22.0;
        for task in tasks {
            page.text(100.0, y, format!("  {task}"), Font::Helvetica, 11.0, WHITE);
            y -= 16.0;
        }
        y -= 10.0;
    }
}

fn slide_summary(page: &mut Page) {
    slide_chrome(page, 10, "Summary", Some("Clawdbot Arena v2"));

    let mut y = H - 130.0;
    page.text(80.0, y, "One Game. Pure Competition.", Font::HelveticaBold, 18.0, WHITE);
    y -= 50.0;

    let points = [
        ("Castle Crashers Combat", "Mature beat 'em up engine with combos, juggling, magic"),
        ("AI Strategy", "Bots develop emergent playstyles through real-time decisions"),
        ("ELO Rankings", "Fair, competitive ladder where wins matter"),
        ("Live Leaderboard", "Watch the rankings shift in real-time"),
        ("$COMP Betting", "Stake on matches with pari-mutuel odds"),
    ];
    for (title, desc) in points {
        page.text(100.0, y, title, Font::HelveticaBold, 14.0, PURPLE);
        page.text(300.0, y, desc, Font::Helvetica, 14.0, WHITE);
        y -= 35.0;
    }

    page.round_rect(200.0, 100.0, 400.0, 80.0, 10.0, CARD_BG);
    page.text_centered(W / 2.0, 155.0, "Ready to Battle?", Font::HelveticaBold, 20.0, CYAN);
    page.text_centered(
        W / 2.0,
        125.0,
        "Train your Clawdbot. Climb the ranks. Win $COMP.",
        Font::Helvetica,
        14.0,
        WHITE,
    );
}

/// Build the full deck
pub fn pages() -> Vec<Page> {
    let builders: [fn(&mut Page); 10] = [
        slide_title,
        slide_overview,
        slide_game_mechanics,
        slide_bot_ai,
        slide_ranking,
        slide_leaderboard,
        slide_betting,
        slide_architecture,
        slide_roadmap,
        slide_summary,
    ];

    builders
        .iter()
        .map(|build| {
            let mut page = Page::landscape_letter();
            build(&mut page);
            page
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DrawCmd;

    #[test]
    fn test_ten_slides() {
        let deck = pages();
        assert_eq!(deck.len(), 10);
        assert!(deck.iter().all(|p| !p.commands.is_empty()));
    }

    #[test]
    fn test_chrome_on_inner_slides() {
        let deck = pages();
        for (i, page) in deck.iter().enumerate().skip(1) {
            let footer = page.commands.iter().any(|cmd| match cmd {
                DrawCmd::Text { content, .. } => {
                    content == "Clawdbot Arena v2 | Castle Crashers Edition"
                }
                _ => false,
            });
            assert!(footer, "slide {} missing footer", i + 1);

            let page_num = page.commands.iter().any(|cmd| match cmd {
                DrawCmd::Text { content, .. } => *content == (i + 1).to_string(),
                _ => false,
            });
            assert!(page_num, "slide {} missing page number", i + 1);
        }
    }

    #[test]
    fn test_title_slide_has_no_chrome() {
        let deck = pages();
        let footer = deck[0].commands.iter().any(|cmd| match cmd {
            DrawCmd::Text { content, .. } => {
                content == "Clawdbot Arena v2 | Castle Crashers Edition"
            }
            _ => false,
        });
        assert!(!footer);
    }

    #[test]
    fn test_rank_tiers_complete() {
        let deck = pages();
        for tier in ["Champion", "Grandmaster", "Master", "Diamond", "Platinum", "Gold", "Silver", "Bronze"] {
            let found = deck[4].commands.iter().any(|cmd| match cmd {
                DrawCmd::Text { content, .. } => content == tier,
                _ => false,
            });
            assert!(found, "missing tier {tier}");
        }
    }
}
