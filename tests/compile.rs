extern crate colored;
extern crate difference;
extern crate statec;

use {
    colored::Colorize,
    difference::{Changeset, Difference},
    statec::{compile, CompileError},
};

#[test]
fn test_one_coin_turnstile() {
    //setup
    let input = "Actions: Turnstile
FSM: OneCoinTurnstile
Initial: Locked
{
  Locked\tCoin\tUnlocked\t{alarmOff unlock}
  Locked\tPass\tLocked\t\talarmOn
  Unlocked\tCoin\tUnlocked\tthankyou
  Unlocked\tPass\tLocked\t\tlock
}";

    //exercise
    let compilation = compile(input, "turnstile").unwrap();

    //verify
    assert!(compilation.warnings.is_empty());
    assert_code_matches(
        &compilation.code,
        "package turnstile

type State interface {
  Coin(fsm *OneCoinTurnstile)
  Pass(fsm *OneCoinTurnstile)
}

type Actions interface {
  AlarmOff()
  Unlock()
  AlarmOn()
  Thankyou()
  Lock()
  UnhandledTransition(state string, event string)
}

type OneCoinTurnstile struct {
  State State
  Actions Actions
}

func NewOneCoinTurnstile(actions Actions) *OneCoinTurnstile {
  return &OneCoinTurnstile{
    Actions: actions,
    State: NewStateLocked(),
  }
}

func (f *OneCoinTurnstile) Coin() {
  f.State.Coin(f)
}

func (f *OneCoinTurnstile) Pass() {
  f.State.Pass(f)
}

type BaseState struct {
  StateName string
}

func (b BaseState) Coin(fsm *OneCoinTurnstile) {
  fsm.Actions.UnhandledTransition(b.StateName, \"Coin\")
}

func (b BaseState) Pass(fsm *OneCoinTurnstile) {
  fsm.Actions.UnhandledTransition(b.StateName, \"Pass\")
}

type StateLocked struct {
  BaseState
}

func NewStateLocked() StateLocked {
  return StateLocked{BaseState{StateName: \"Locked\"}}
}

func (s StateLocked) Coin(fsm *OneCoinTurnstile) {
  fsm.State = NewStateUnlocked()
  fsm.Actions.AlarmOff()
  fsm.Actions.Unlock()
}

func (s StateLocked) Pass(fsm *OneCoinTurnstile) {
  fsm.State = NewStateLocked()
  fsm.Actions.AlarmOn()
}

type StateUnlocked struct {
  BaseState
}

func NewStateUnlocked() StateUnlocked {
  return StateUnlocked{BaseState{StateName: \"Unlocked\"}}
}

func (s StateUnlocked) Coin(fsm *OneCoinTurnstile) {
  fsm.State = NewStateUnlocked()
  fsm.Actions.Thankyou()
}

func (s StateUnlocked) Pass(fsm *OneCoinTurnstile) {
  fsm.State = NewStateLocked()
  fsm.Actions.Lock()
}
",
    );
}

#[test]
fn test_two_coin_turnstile_with_inheritance() {
    //setup
    let input = "Actions: Turnstile
FSM: TwoCoinTurnstile
Initial: Locked
{
  (Base)  Reset  Locked  lock

  Locked : Base {
    Pass  Alarming   -
    Coin  FirstCoin  -
  }

  Alarming : Base  >alarmOn <alarmOff {
    - - -
  }

  FirstCoin : Base {
    Pass  Alarming  -
    Coin  Unlocked  unlock
  }

  Unlocked : Base {
    Pass  Locked  lock
    Coin  -       thankyou
  }
}";

    //exercise
    let compilation = compile(input, "turnstile").unwrap();

    //verify
    assert!(compilation.warnings.is_empty());

    let code = &compilation.code;

    // Entry actions of the destination fire after the transition's own.
    assert!(code.contains(
        "func (s StateLocked) Pass(fsm *TwoCoinTurnstile) {
  fsm.State = NewStateAlarming()
  fsm.Actions.AlarmOn()
}"
    ));

    // Inherited transitions carry inherited exit actions.
    assert!(code.contains(
        "func (s StateAlarming) Reset(fsm *TwoCoinTurnstile) {
  fsm.State = NewStateLocked()
  fsm.Actions.Lock()
  fsm.Actions.AlarmOff()
}"
    ));

    // A dash next-state never changes state and never re-enters.
    assert!(code.contains(
        "func (s StateUnlocked) Coin(fsm *TwoCoinTurnstile) {
  fsm.Actions.Thankyou()
}"
    ));

    // Abstract states produce no state class.
    assert!(!code.contains("type StateBase struct"));

    // Every concrete state answers every event, if only via BaseState.
    assert!(code.contains("func (b BaseState) Reset(fsm *TwoCoinTurnstile) {"));
    assert!(code.contains("func (b BaseState) Pass(fsm *TwoCoinTurnstile) {"));
    assert!(code.contains("func (b BaseState) Coin(fsm *TwoCoinTurnstile) {"));
}

#[test]
fn test_syntax_diagnostics() {
    //setup
    let input = "FSM: fsm
Initial: a
{
  a & e1 a -
";

    //exercise
    let err = compile(input, "fsm").unwrap_err();

    //verify
    match err {
        CompileError::Syntax(_) => {}
        ref other => panic!("expected syntax errors, got {:?}", other),
    }

    assert_eq!(
        err.diagnostics(),
        vec![
            "Type: SYNTAX - Line: 4 Pos 5 - Message: ".to_string(),
            "Type: PARSE - Line: 5 Pos 1 - Message: TRANSITION_GROUP|END".to_string(),
        ]
    );
}

#[test]
fn test_semantic_diagnostics() {
    //setup
    let input = "FSM: fsm Initial: c {
  (a) e1 X -
  (b) e1 Y -
  c:a:b - - -
}";

    //exercise
    let err = compile(input, "fsm").unwrap_err();

    //verify
    let diagnostics = err.diagnostics();
    assert!(diagnostics.contains(&"Type: UNDEFINED_STATE - Element: X".to_string()));
    assert!(diagnostics.contains(&"Type: UNDEFINED_STATE - Element: Y".to_string()));
    assert!(diagnostics.contains(&"Type: CONFLICTING_SUPER_STATES - Element: c:e1".to_string()));
}

#[test]
fn test_warnings_do_not_halt_compilation() {
    //setup
    let input = "FSM: fsm Initial: b { a e b - \n b - - - }";

    //exercise
    let compilation = compile(input, "fsm").unwrap();

    //verify
    let warnings: Vec<String> = compilation.warnings.iter().map(|w| w.to_string()).collect();
    assert_eq!(warnings, vec!["Type: UNUSED_STATE - Element: a".to_string()]);
    assert!(compilation.code.contains("type StateB struct {"));
}

fn assert_code_matches(result: &str, expected: &str) {
    let change_set = Changeset::new(expected, result, "\n");
    if change_set.distance != 0 {
        print_pretty_diff(&change_set);
        panic!("Generated code did not match expectation");
    }
}

fn print_pretty_diff(change_set: &Changeset) {
    for diff in &change_set.diffs {
        match diff {
            &Difference::Same(ref string) => {
                for line in string.split('\n') {
                    println!(" |{}", line);
                }
            }
            &Difference::Rem(ref string) => {
                for line in string.split('\n') {
                    println!("{}", format!("-|{}", line).bright_red());
                }
            }
            &Difference::Add(ref string) => {
                for line in string.split('\n') {
                    println!("{}", format!("+|{}", line).bright_green());
                }
            }
        };
    }
}
