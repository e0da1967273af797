//! Sentence templates for corpus generation.
//!
//! Templates are keyed by (scenario, PII class). The PII set frames the
//! entity as real personal data (medical, legal, financial records); the
//! non-PII set uses the same entity strings in fictional or public-event
//! contexts. Pairing both teaches a downstream model that surface form alone
//! does not imply sensitivity.
//!
//! Each template carries exactly one `{name}` and/or one `{address}`
//! placeholder as its scenario requires; there is no nesting.

use crate::rng::Rng;
use serde::{Deserialize, Serialize};

/// Which entity role(s) a template exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Person name only.
    Person,
    /// Address only.
    Location,
    /// Both a person and an address.
    PersonAndLocation,
}

impl Scenario {
    /// All scenarios, in generation order.
    pub const ALL: [Scenario; 3] = [
        Scenario::Person,
        Scenario::Location,
        Scenario::PersonAndLocation,
    ];
}

const PII_PERSON: &[&str] = &[
    "My name is {name}.",
    "Please contact {name} for more details.",
    "The medical record belongs to {name}.",
    "The diagnosis was confirmed by Dr. {name}.",
    "The legal document is signed by {name}.",
    "The insurance claim was filed by {name}.",
    "The bank account holder is {name}.",
    "The police report names {name}.",
    "Please update the contact details for {name}.",
    "The prescription was issued to {name}.",
    "The appointment on Friday is booked under {name}.",
    "The payroll record lists {name} as the employee.",
    "The CPF statement was mailed to {name}.",
    "The loan application was approved for {name}.",
    "The emergency contact listed is {name}.",
    "The visa application was submitted by {name}.",
];

const PII_LOCATION: &[&str] = &[
    "This is my address: {address}.",
    "Please deliver to {address}.",
    "You can reach me at {address}.",
    "The billing address is {address}.",
    "The lease agreement states {address}.",
    "The tax form shows {address}.",
    "The shipping address is {address}.",
    "The voter registration lists {address}.",
    "My registered home address is {address}.",
    "The utility bill is addressed to {address}.",
    "Renovation works were approved for {address}.",
    "The clinic mailed the results to {address}.",
    "The property at {address} is under my name.",
    "The delivery failed at {address} yesterday.",
    "My workplace address is {address}.",
    "The census form records {address}.",
];

const PII_PERSON_LOCATION: &[&str] = &[
    "The patient {name} lives at {address}.",
    "The hospital admitted {name} at {address}.",
    "The court record lists {name} at {address}.",
    "The tax return of {name} lists {address}.",
    "The police report records {name} at {address}.",
    "The insurance claim of {name} lists {address}.",
    "The housing lease for {name} is {address}.",
    "The bank record of {name} lists {address}.",
    "{name} registered the vehicle at {address}.",
    "The clinic referred {name} living at {address}.",
    "The subpoena for {name} was served at {address}.",
    "The loan for {name} is secured against {address}.",
    "{name} filed a noise complaint from {address}.",
    "The utilities account of {name} is billed to {address}.",
    "The school enrolled {name} residing at {address}.",
    "{name} reported a break-in at {address}.",
];

const NONPII_PERSON: &[&str] = &[
    "{name} is a character in the story.",
    "{name} is the strongest character in the game.",
    "Have you read the book by {name}?",
    "The movie featured {name} in a small role.",
    "The robot is named {name}.",
    "In the story, {name} was a brave knight.",
    "The video game character {name} is popular.",
    "The ship was christened {name}.",
    "The spaceship in the novel is captained by {name}.",
    "{name} is the final boss of the dungeon.",
    "Legend says {name} founded the village.",
    "The statue depicts the mythical hero {name}.",
    "The sitcom character {name} returns next season.",
    "Players can unlock {name} after level ten.",
    "The puppet show stars {name}.",
    "The mascot is affectionately called {name}.",
];

const NONPII_LOCATION: &[&str] = &[
    "The concert will be held at {address}.",
    "The sports match is happening at {address}.",
    "The art exhibition is at {address}.",
    "The food festival is hosted at {address}.",
    "The book fair is set up at {address}.",
    "The carnival takes place at {address}.",
    "The marathon passes through {address}.",
    "The wedding reception is at {address}.",
    "The fun run starts at {address}.",
    "The night market opens at {address} this weekend.",
    "The charity bazaar moved to {address}.",
    "Auditions will be held at {address}.",
    "The fireworks are best viewed from {address}.",
    "The pop-up library appears at {address} monthly.",
    "The cosplay convention returns to {address}.",
    "Free parking is available near {address} during the fair.",
];

const NONPII_PERSON_LOCATION: &[&str] = &[
    "{name} attended the concert at {address}.",
    "{name} joined the marathon at {address}.",
    "{name} performed in the play at {address}.",
    "{name} gave a speech at {address}.",
    "{name} taught a class at {address}.",
    "{name} filmed a scene at {address}.",
    "{name} joined the tech meetup at {address}.",
    "{name} ran a workshop at {address}.",
    "{name} signed autographs at {address}.",
    "{name} hosted the trivia night at {address}.",
    "{name} unveiled the mural at {address}.",
    "{name} judged the bake-off at {address}.",
    "{name} led the walking tour through {address}.",
    "{name} launched the book at {address}.",
    "{name} emceed the gala at {address}.",
    "{name} coached the clinic session at {address}.",
];

/// The fixed template set for a (scenario, PII class) key.
#[must_use]
pub fn templates(scenario: Scenario, pii: bool) -> &'static [&'static str] {
    match (scenario, pii) {
        (Scenario::Person, true) => PII_PERSON,
        (Scenario::Location, true) => PII_LOCATION,
        (Scenario::PersonAndLocation, true) => PII_PERSON_LOCATION,
        (Scenario::Person, false) => NONPII_PERSON,
        (Scenario::Location, false) => NONPII_LOCATION,
        (Scenario::PersonAndLocation, false) => NONPII_PERSON_LOCATION,
    }
}

/// Render one sentence: pick a template uniformly at random for the key and
/// substitute the placeholders its scenario uses.
#[must_use]
pub fn render(scenario: Scenario, pii: bool, name: &str, address: &str, rng: &mut Rng) -> String {
    let template = rng.choose(templates(scenario, pii));
    template
        .replacen("{name}", name, 1)
        .replacen("{address}", address, 1)
}
