use starfolio::animation::{Phase, Typewriter};

/// Run `steps` firings, recording the displayed prefix after each one.
fn trace(tw: &mut Typewriter, steps: usize) -> Vec<String> {
    (0..steps)
        .map(|_| {
            tw.advance();
            tw.displayed().to_string()
        })
        .collect()
}

#[test]
fn hi_cycles_type_hold_delete_hold() {
    let mut tw = Typewriter::new("Hi");
    assert_eq!(tw.displayed(), "");
    assert_eq!(tw.phase(), Phase::Typing);

    let seen = trace(&mut tw, 7);
    assert_eq!(seen, vec!["H", "Hi", "Hi", "H", "", "", "H"]);
}

#[test]
fn phases_follow_fixed_order() {
    let mut tw = Typewriter::new("Hi");
    let mut phases = vec![tw.phase()];
    for _ in 0..12 {
        tw.advance();
        if phases.last() != Some(&tw.phase()) {
            phases.push(tw.phase());
        }
    }
    assert_eq!(
        phases,
        vec![
            Phase::Typing,
            Phase::HoldFull,
            Phase::Deleting,
            Phase::HoldEmpty,
            Phase::Typing,
            Phase::HoldFull,
            Phase::Deleting,
            Phase::HoldEmpty,
            Phase::Typing,
        ]
    );
}

#[test]
fn full_text_after_len_ticks_and_empty_after_len_more() {
    let text = "Hey there,";
    let len = text.chars().count();
    let mut tw = Typewriter::new(text);

    for _ in 0..len {
        tw.advance();
    }
    assert_eq!(tw.displayed(), text);
    assert_eq!(tw.phase(), Phase::HoldFull);

    tw.advance();
    assert_eq!(tw.displayed(), text);
    assert_eq!(tw.phase(), Phase::Deleting);

    for _ in 0..len {
        tw.advance();
    }
    assert_eq!(tw.displayed(), "");
    assert_eq!(tw.phase(), Phase::HoldEmpty);
}

#[test]
fn cycle_is_periodic() {
    let text = "abc";
    let period = 2 * text.len() + 2;
    let mut tw = Typewriter::new(text);
    let start = tw.clone();

    for _ in 0..period {
        tw.advance();
    }
    assert_eq!(tw, start);

    let first = trace(&mut tw, period);
    let second = trace(&mut tw, period);
    assert_eq!(first, second);
}

#[test]
fn displayed_is_always_a_prefix() {
    for text in ["", "a", "Hey there,", "日本語テキスト", "e\u{301}motion"] {
        let mut tw = Typewriter::new(text);
        let mut last_len = 0usize;
        let mut last_phase = tw.phase();
        for _ in 0..(4 * text.chars().count() + 8) {
            tw.advance();
            let shown = tw.displayed();
            assert!(text.starts_with(shown), "{shown:?} not a prefix of {text:?}");
            let len = shown.chars().count();
            match last_phase {
                Phase::Typing => assert!(len >= last_len),
                Phase::Deleting => assert!(len <= last_len),
                Phase::HoldFull | Phase::HoldEmpty => assert_eq!(len, last_len),
            }
            last_len = len;
            last_phase = tw.phase();
        }
    }
}

#[test]
fn empty_text_only_holds() {
    let mut tw = Typewriter::new("");
    assert_eq!(tw.phase(), Phase::HoldFull);

    let mut phases = Vec::new();
    for _ in 0..4 {
        tw.advance();
        assert_eq!(tw.displayed(), "");
        phases.push(tw.phase());
    }
    assert_eq!(
        phases,
        vec![
            Phase::HoldEmpty,
            Phase::HoldFull,
            Phase::HoldEmpty,
            Phase::HoldFull
        ]
    );
}
