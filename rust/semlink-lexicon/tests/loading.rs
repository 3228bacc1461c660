use anyhow::Result;
use pretty_assertions::assert_eq;
use semlink_lexicon::{
    ArgNumber, ClassId, LexiconError, PbVnMappings, Preposition, PropBank, SyntaxElement,
    SynRestriction, ThematicRole, VerbNet,
};
use serde_json::json;

fn verbnet() -> Result<VerbNet> {
    let classes = json!({
        "classes": [
            {
                "id": "send-11.1",
                "roles": ["Agent", "Theme", "Initial_Location", "Destination"],
                "members": [{"name": "send"}, {"name": "mail", "features": ["+mail"]}],
                "frames": [{
                    "description": "NP V NP PP.destination",
                    "syntax": [
                        {"type": "NP", "role": "Agent"},
                        {"type": "VERB"},
                        {"type": "NP", "role": "Theme", "restrictions": [{"value": "+", "type": "plural"}]},
                        {"type": "PREP", "value": "to towards"},
                        {"type": "NP", "role": "Destination"},
                        {"type": "ADV"}
                    ],
                    "semantics": [
                        {"predicate": "motion", "args": [
                            {"type": "Event", "value": "during(E)"},
                            {"type": "ThemRole", "value": "Theme"}
                        ]},
                        {"predicate": "levitate", "polarity": false, "args": []}
                    ]
                }]
            },
            {"id": "send-11.1-1", "parent": "send-11.1", "roles": ["Sorcerer"]}
        ]
    });
    Ok(VerbNet::from_json(&classes.to_string())?)
}

#[test]
fn loads_the_class_graph() -> Result<()> {
    let verbnet = verbnet()?;
    assert_eq!(verbnet.len(), 2);

    let chain: Vec<&str> = verbnet
        .ancestors(&ClassId::new("send-11.1-1"))
        .iter()
        .map(|class| class.id.as_str())
        .collect();
    assert_eq!(chain, vec!["send-11.1-1", "send-11.1"]);
    Ok(())
}

#[test]
fn unknown_labels_become_sentinels() -> Result<()> {
    let verbnet = verbnet()?;
    let child = verbnet
        .get(&ClassId::new("send-11.1-1"))
        .ok_or_else(|| anyhow::anyhow!("missing subclass"))?;
    assert_eq!(child.roles, vec![ThematicRole::Unknown]);

    let parent = verbnet
        .get(&ClassId::new("send-11.1"))
        .ok_or_else(|| anyhow::anyhow!("missing class"))?;
    let semantics = &parent.frames[0].semantics;
    assert_eq!(semantics[1].to_string(), "!unknown[]");
    Ok(())
}

#[test]
fn parses_frame_syntax() -> Result<()> {
    let verbnet = verbnet()?;
    let class = verbnet
        .get(&ClassId::new("send-11.1"))
        .ok_or_else(|| anyhow::anyhow!("missing class"))?;
    let syntax = &class.frames[0].syntax;

    assert_eq!(syntax.len(), 6);
    match &syntax[2] {
        SyntaxElement::NounPhrase { role, restrictions } => {
            assert_eq!(*role, ThematicRole::Theme);
            assert!(restrictions.include.contains(&SynRestriction::Plural));
        }
        other => panic!("expected a noun phrase, got {other:?}"),
    }
    match &syntax[3] {
        SyntaxElement::Preposition { values, .. } => {
            assert_eq!(values, &vec![Preposition::To, Preposition::Towards]);
        }
        other => panic!("expected a preposition, got {other:?}"),
    }
    assert_eq!(syntax[5], SyntaxElement::Adverb);
    Ok(())
}

#[test]
fn rejects_unknown_syntax_elements() {
    let classes = json!({"classes": [{"id": "x-1", "frames": [{"syntax": [{"type": "CLAUSE"}]}]}]});
    let error = VerbNet::from_json(&classes.to_string());
    assert!(matches!(error, Err(LexiconError::Json(_))));
}

#[test]
fn mappings_attach_propbank_rolesets() -> Result<()> {
    let propbank = PropBank::from_json(
        &json!([
            {"id": "send.01", "roles": [
                {"number": "0", "f": "PAG", "descr": "sender"},
                {"number": "1", "f": "PPT", "descr": "sent"},
                {"number": "2", "f": "GOL", "descr": "sent-to"}
            ]}
        ])
        .to_string(),
    )?;
    let mappings = PbVnMappings::from_json(
        &json!([
            {"lemma": "send", "mappings": [
                {"id": "send.01", "mappings": [
                    {"vncls": "11.1", "roles": [
                        {"number": "0", "vntheta": "Agent"},
                        {"number": "2", "vntheta": "Destination"},
                        {"number": "2", "vntheta": "Recipient"}
                    ]}
                ]},
                {"id": "send.02", "mappings": [
                    {"vncls": "11.1", "roles": [{"number": "1", "vntheta": "Theme"}]}
                ]}
            ]}
        ])
        .to_string(),
        &propbank,
    )?;

    let rolesets = mappings.rolesets("send", &ClassId::new("send-11.1"));
    assert_eq!(rolesets.len(), 2);
    assert_eq!(
        rolesets[0].candidates(ArgNumber::A2),
        ["Destination".to_string(), "Recipient".to_string()]
    );
    assert_eq!(rolesets[0].description(ArgNumber::A2), Some("sent-to"));
    assert_eq!(
        rolesets[0].declared(),
        vec![ArgNumber::A0, ArgNumber::A1, ArgNumber::A2]
    );

    // send.02 is missing from the PropBank index, so its mapped numbers
    // stand in for the declared ones
    assert!(rolesets[1].roleset.is_none());
    assert_eq!(rolesets[1].declared(), vec![ArgNumber::A1]);

    assert!(mappings.rolesets("mail", &ClassId::new("send-11.1")).is_empty());
    Ok(())
}
