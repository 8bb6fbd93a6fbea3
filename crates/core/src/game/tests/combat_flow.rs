//! Melee exchanges, kill rewards, and the enemy phase that follows a strike.

use super::support::*;

#[test]
fn lethal_strike_removes_monster_and_awards_template_xp() {
    let mut game = open_arena_game();
    let bat = add_bat(&mut game, Pos { y: 1, x: 2 });
    game.state.monsters[bat].hp = 10;

    assert_eq!(game.apply_move(Direction::Right), TurnOutcome::Completed);
    assert!(!game.state.monsters.contains_key(bat));
    assert_eq!(game.state.player.xp, template_for(MonsterKind::Bat).xp_reward);
    assert_eq!(game.state.player.pos, Pos { y: 1, x: 1 }, "attacking does not move");
    assert_eq!(game.message(), Some("defeated Bat: XP +5"));
}

#[test]
fn surviving_monster_strikes_back_in_same_turn() {
    let mut game = open_arena_game();
    let ghost = add_monster(&mut game, MonsterKind::Ghost, Pos { y: 2, x: 1 });

    assert_eq!(game.apply_move(Direction::Down), TurnOutcome::Completed);
    assert_eq!(game.state.monsters[ghost].hp, 20);
    assert_eq!(game.state.player.hp, 92);

    let tail: Vec<&LogEvent> = game.log().iter().rev().take(2).collect();
    assert_eq!(tail[0], &LogEvent::MonsterAttacked { monster: MonsterKind::Ghost, damage: 8 });
    assert_eq!(
        tail[1],
        &LogEvent::PlayerAttacked { monster: MonsterKind::Ghost, damage: 10, remaining_hp: 20 }
    );
}

#[test]
fn ogre_takes_six_default_strikes() {
    let mut game = open_arena_game();
    let ogre = add_monster(&mut game, MonsterKind::Ogre, Pos { y: 1, x: 2 });
    game.state.player.max_hp = 500;
    game.state.player.hp = 500;

    for _ in 0..5 {
        assert_eq!(game.apply_move(Direction::Right), TurnOutcome::Completed);
    }
    assert_eq!(game.state.monsters[ogre].hp, 10);

    assert_eq!(game.apply_move(Direction::Right), TurnOutcome::Completed);
    assert!(game.state.monsters.is_empty());
    assert_eq!(game.state.player.hp, 500 - 5 * 15);
    assert_eq!(game.state.player.xp, 25);
}

#[test]
fn other_monsters_still_act_after_a_kill() {
    let mut game = open_arena_game();
    let target = add_bat(&mut game, Pos { y: 1, x: 2 });
    game.state.monsters[target].hp = 1;
    let chaser = add_bat(&mut game, Pos { y: 6, x: 6 });

    game.apply_move(Direction::Right);
    assert_eq!(game.state.monsters[chaser].pos, Pos { y: 6, x: 5 });
}
