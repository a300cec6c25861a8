use splinter::*;

#[test]
fn invariant_rendering() {
    assert_eq!(Float3::new(1.0, 2.0, 3.0).to_string(), "<1, 2, 3>");
    assert_eq!(Int2::new(-1, 4).to_string(), "<-1, 4>");
    assert_eq!(UInt1::new(7).to_string(), "<7>");
}

#[test]
fn caller_supplied_locale() {
    let v = Float3::new(1.5, 2.0, 3.0);

    assert_eq!(v.display_in(Locale::new(';')).to_string(), "<1.5; 2; 3>");
    assert_eq!(v.display_in(Locale::INVARIANT).to_string(), v.to_string());
}

#[test]
fn precision_applies_to_every_component() {
    assert_eq!(
        format!("{:.2}", Float2::new(1.0, 0.5)),
        "<1.00, 0.50>"
    );
}
