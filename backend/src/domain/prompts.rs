//! Prompt templates for the two model calls.
//!
//! The model is instructed in German; the analysis user prompt stays in
//! English because the returned field names are English.

use std::fmt::Display;

use crate::domain::{AnalysisParameters, ContextInfo, Strategy};

/// System and user message pair sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

const ANALYSIS_INSTRUCTIONS: &str = "Du bist ein Professor für Linguistik und Psycholinguistik mit 20 Jahren Erfahrung in Cybermobbing-Forschung. Führe eine wissenschaftlich fundierte, tiefgreifende Analyse durch.

ERWEITERTE SPRACHWISSENSCHAFTLICHE ANALYSE:

1. PRAGMATISCHE EBENE (Austin, Searle, Grice):
- Sprechakte-Taxonomie: Welche illokutionären Akte? (Assertive, Direktive, Kommissive, Expressive, Deklarative)
- Grice'sche Maximen: Welche Kommunikationsprinzipien werden verletzt? (Quantität, Qualität, Relation, Modalität)
- Implikaturen-Analyse: Konventionale vs. konversationale Implikaturen
- Präsuppositionen: Existentielle, semantische, pragmatische Voraussetzungen
- Höflichkeitstheorie (Brown/Levinson): Face-threatening acts, positive/negative face
- Deixis-Analyse: Personal-, Raum-, Zeit-Deixis zur Machtpositionierung

2. SEMANTISCHE TIEFENANALYSE:
- Lexikalische Semantik: Bedeutungsrelationen (Synonymie, Antonymie, Hyponymie)
- Konnotationsanalyse: Emotionale, evaluative, stilistische Nebenbedeutungen
- Metaphern-Theorie (Lakoff/Johnson): Konzeptuelle Metaphern und deren Wirkung
- Frame-Semantik (Fillmore): Welche mentalen Rahmen werden aktiviert?
- Argumentstruktur: Thematische Rollen und deren Manipulation
- Modalität: Epistemische, deontische, dynamische Modalität

3. SYNTAKTISCHE MACHTSTRUKTUREN:
- Satzarten und deren pragmatische Funktion
- Modalverben: Graduierung von Machtansprüchen
- Aktiv/Passiv: Verantwortungszuschreibung und -verschleierung
- Topikalisierung: Was wird in den Fokus gerückt?
- Koordination vs. Subordination: Hierarchisierung von Inhalten
- Ellipsen: Was wird verschwiegen und warum?

4. DISKURSLINGUISTISCHE STRATEGIEN:
- Critical Discourse Analysis (van Dijk, Fairclough)
- Othering-Mechanismen: In-group/Out-group Konstruktion
- Delegitimierungsstrategien nach van Leeuwen
- Topos-Analyse: Welche Argumentationsmuster?
- Interdiskursivität: Bezug zu anderen Diskursen
- Recontextualization: Wie werden Bedeutungen verschoben?

5. PSYCHOLINGUISTISCHE WIRKUNGSANALYSE:
- Emotionale Valenz: Positive/negative Affektladung
- Arousal-Niveau: Aktivierungsgrad der Sprache
- Kognitive Verzerrungen: Confirmation Bias, Availability Heuristic
- Identitätskonstruktion: Wie wird das Selbst-/Fremdbild konstruiert?
- Persuasionsstrategien: Ethos, Pathos, Logos
- Neurolinguistische Aspekte: Sprachverarbeitung und emotionale Reaktion

6. SOZIOLINGUISTISCHE DIMENSIONEN:
- Code-Switching: Registerwechsel als Machtinstrument
- Soziolektale Markierungen: Schicht-, Alters-, Gruppenzugehörigkeit
- Genderlinguistik: Geschlechtsspezifische Sprachmuster
- Interkulturelle Pragmatik: Kulturelle Höflichkeitsnormen";

const ANALYSIS_RESPONSE_FORMAT: &str = r#"Antworte im JSON-Format:
{
  "riskScore": number (0-10),
  "riskLevel": "low" | "medium" | "high",
  "categories": {
    "linguistic": {
      "negativeLanguage": number (0-100),
      "aggressiveWords": number (0-100),
      "emotionalIntensity": number (0-100)
    },
    "cyberbullying": {
      "degradation": "low" | "medium" | "high",
      "isolation": "low" | "medium" | "high",
      "powerImbalance": "low" | "medium" | "high"
    },
    "communication": {
      "tone": string,
      "intention": string,
      "escalationPotential": "low" | "medium" | "high"
    }
  },
  "recommendedStrategies": [strategy_ids as numbers],
  "linguisticAnalysis": {
    "pragmatic": {
      "speechActs": [string],
      "griceMaxims": [string],
      "implicatures": [string],
      "presuppositions": [string],
      "faceThreat": "low" | "medium" | "high",
      "politenessStrategies": [string],
      "deixis": [string]
    },
    "semantic": {
      "keyWords": [string],
      "metaphors": [string],
      "connotations": [string],
      "emotionalLoad": number (0-100),
      "frames": [string],
      "modality": [string],
      "argumentStructure": string
    },
    "syntactic": {
      "sentenceTypes": [string],
      "modalVerbs": [string],
      "intensifiers": [string],
      "complexity": "simple" | "medium" | "complex",
      "voiceStructure": string,
      "topicalization": [string],
      "ellipses": [string]
    },
    "discourse": {
      "strategies": [string],
      "powerDynamics": string,
      "exclusionMechanisms": [string],
      "othering": [string],
      "legitimation": [string],
      "interdiscursivity": [string]
    },
    "psycholinguistic": {
      "manipulationTactics": [string],
      "identityThreats": [string],
      "emotionalImpact": string,
      "cognitiveDistortions": [string],
      "persuasionStrategies": [string],
      "arousalLevel": "low" | "medium" | "high"
    },
    "sociolinguistic": {
      "registerShifts": [string],
      "socialMarkers": [string],
      "culturalNorms": [string],
      "powerRelations": string
    }
  }
}"#;

const RESPONSE_SYSTEM_PROMPT: &str = "Du bist ein Experte für Konfliktlösung und strategische Kommunikation. Generiere eine passende Antwort auf einen Cybermobbing-Kommentar unter Verwendung der angegebenen Strategie.

Die Antwort sollte:
1. Den Richtlinien der gewählten Strategie folgen
2. Dem Kontext angemessen sein
3. Professionell und konstruktiv sein
4. Die Beziehung und das gewünschte Ergebnis berücksichtigen
5. Realistisch und umsetzbar sein

Antworte nur mit dem vorgeschlagenen Antworttext, ohne zusätzliche Formatierung oder Erklärung.";

/// Text returned when the model produces an empty reply.
pub const RESPONSE_FALLBACK_TEXT: &str =
    "Entschuldigung, ich konnte keine passende Antwort generieren.";

fn joined_or<T: Display>(items: &[T], default: &str) -> String {
    if items.is_empty() {
        return default.to_owned();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|text| !text.is_empty()).unwrap_or(default)
}

/// Build the analysis prompt.
///
/// # Examples
/// ```
/// use commentguard::domain::prompts::analysis_prompt;
///
/// let prompt = analysis_prompt("Niemand mag dich", None, None);
/// assert_eq!(prompt.user, "Analyze this comment: \"Niemand mag dich\"");
/// assert!(prompt.system.contains("Antworte im JSON-Format"));
/// ```
#[must_use]
pub fn analysis_prompt(
    comment: &str,
    parameters: Option<&AnalysisParameters>,
    context: Option<&ContextInfo>,
) -> Prompt {
    let context_block = context.map_or_else(String::new, |context| {
        format!(
            "SOZIOKULTURELLER KONTEXT: \nBeziehung: {}\nGewünschte Reaktion: {}\nPlatform: {}\nZusatzinfo: {}",
            context.relationship,
            context.desired_reaction,
            non_empty_or(context.platform.as_deref(), "unbekannt"),
            non_empty_or(context.additional_info.as_deref(), "keine"),
        )
    });
    let system = format!("{ANALYSIS_INSTRUCTIONS}\n\n{context_block}\n\n{ANALYSIS_RESPONSE_FORMAT}");

    let mut user = format!("Analyze this comment: \"{comment}\"");
    if let Some(parameters) = parameters {
        user.push_str(&format!(
            "\n\nAnalysis parameters:\n- Severity levels to check: {}\n- Categories to focus on: {}\n- Context: {}",
            joined_or(&parameters.severity_levels, "all"),
            joined_or(&parameters.categories, "all"),
            joined_or(&parameters.context, "general"),
        ));
    }
    if let Some(context) = context {
        user.push_str(&format!(
            "\n\nContext information:\n- Relationship to attacker: {}\n- Desired reaction: {}\n- Additional info: {}",
            context.relationship,
            context.desired_reaction,
            non_empty_or(context.additional_info.as_deref(), "None"),
        ));
    }

    Prompt { system, user }
}

/// Build the reply-generation prompt for one strategy.
#[must_use]
pub fn response_prompt(comment: &str, strategy: &Strategy, context: Option<&ContextInfo>) -> Prompt {
    let mut user = format!(
        "Ursprünglicher Kommentar: \"{comment}\"\n\nStrategie: {}\nStrategiebeschreibung: {}\n\nGeneriere eine Antwort gemäß dieser Strategie.",
        strategy.name, strategy.description,
    );
    if let Some(context) = context {
        user.push_str(&format!(
            "\n\nKontext:\n- Beziehung: {}\n- Gewünschte Reaktion: {}\n- Zusätzlicher Kontext: {}",
            context.relationship,
            context.desired_reaction,
            non_empty_or(context.additional_info.as_deref(), "Keine"),
        ));
    }

    Prompt {
        system: RESPONSE_SYSTEM_PROMPT.to_owned(),
        user,
    }
}
