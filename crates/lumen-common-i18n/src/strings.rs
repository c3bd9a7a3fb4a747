// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-side strings used when deriving page metadata.

use crate::instance::Instance;

/// Shown for user profiles whose stored description is the literal `NULL`.
pub const USER_DESCRIPTION_PLACEHOLDER: &str =
	"This is where we display the description on the production server.";

/// Human readable labels for entity types.
#[derive(Debug, Clone, Copy)]
pub struct EntityLabels {
	pub applet: &'static str,
	pub article: &'static str,
	pub course: &'static str,
	pub course_page: &'static str,
	pub event: &'static str,
	pub exercise: &'static str,
	pub exercise_group: &'static str,
	pub grouped_exercise: &'static str,
	pub page: &'static str,
	pub solution: &'static str,
	pub taxonomy_term: &'static str,
	pub user: &'static str,
	pub video: &'static str,
	pub topic_folder: &'static str,
	pub topic: &'static str,
	pub subject: &'static str,
	pub revision: &'static str,
	pub folder: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ServerStrings {
	/// Appended to every page title.
	pub slogan: &'static str,
	pub entities: EntityLabels,
}

const DE: ServerStrings = ServerStrings {
	slogan: "lernen mit Serlo!",
	entities: EntityLabels {
		applet: "Applet",
		article: "Artikel",
		course: "Kurs",
		course_page: "Kursseite",
		event: "Veranstaltung",
		exercise: "Aufgabe",
		exercise_group: "Aufgabengruppe",
		grouped_exercise: "Teilaufgabe",
		page: "Seite",
		solution: "Lösung",
		taxonomy_term: "Taxonomie-Begriff",
		user: "Benutzer",
		video: "Video",
		topic_folder: "Aufgabensammlung",
		topic: "Thema",
		subject: "Fach",
		revision: "Bearbeitung",
		folder: "Ordner",
	},
};

const EN: ServerStrings = ServerStrings {
	slogan: "learn with Serlo!",
	entities: EntityLabels {
		applet: "Applet",
		article: "Article",
		course: "Course",
		course_page: "Course Page",
		event: "Event",
		exercise: "Exercise",
		exercise_group: "Exercise Group",
		grouped_exercise: "Grouped Exercise",
		page: "Page",
		solution: "Solution",
		taxonomy_term: "Taxonomy Term",
		user: "User",
		video: "Video",
		topic_folder: "Exercise folder",
		topic: "Topic",
		subject: "Subject",
		revision: "Revision",
		folder: "Folder",
	},
};

const ES: ServerStrings = ServerStrings {
	slogan: "¡aprende con Serlo!",
	entities: EntityLabels {
		applet: "Applet",
		article: "Artículo",
		course: "Curso",
		course_page: "Página del curso",
		event: "Evento",
		exercise: "Ejercicio",
		exercise_group: "Grupo de ejercicios",
		grouped_exercise: "Ejercicio agrupado",
		page: "Página",
		solution: "Solución",
		taxonomy_term: "Término de taxonomía",
		user: "Usuario",
		video: "Vídeo",
		topic_folder: "Carpeta de ejercicios",
		topic: "Tema",
		subject: "Materia",
		revision: "Revisión",
		folder: "Carpeta",
	},
};

const FR: ServerStrings = ServerStrings {
	slogan: "apprendre avec Serlo!",
	entities: EntityLabels {
		applet: "Applet",
		article: "Article",
		course: "Cours",
		course_page: "Page de cours",
		event: "Événement",
		exercise: "Exercice",
		exercise_group: "Groupe d'exercices",
		grouped_exercise: "Exercice groupé",
		page: "Page",
		solution: "Solution",
		taxonomy_term: "Terme de taxonomie",
		user: "Utilisateur",
		video: "Vidéo",
		topic_folder: "Dossier d'exercices",
		topic: "Thème",
		subject: "Matière",
		revision: "Révision",
		folder: "Dossier",
	},
};

const HI: ServerStrings = ServerStrings {
	slogan: "सेर्लो के साथ सीखें!",
	entities: EntityLabels {
		applet: "एप्लेट",
		article: "लेख",
		course: "पाठ्यक्रम",
		course_page: "अध्ययन पृष्ठ",
		event: "कार्यक्रम",
		exercise: "अभ्यास",
		exercise_group: "व्यायाम समूह",
		grouped_exercise: "समूह व्यायाम",
		page: "पृष्ठ",
		solution: "हल",
		taxonomy_term: "टैक्सोनोमी शब्द",
		user: "उपयोगकर्ता",
		video: "वीडियो",
		topic_folder: "अभ्यास फोल्डर",
		topic: "विषय",
		subject: "विषय",
		revision: "संशोधन",
		folder: "फोल्डर",
	},
};

/// Returns the server-side strings for an instance.
///
/// Instances without their own table (currently `ta`) use English.
pub fn strings(instance: Instance) -> &'static ServerStrings {
	match instance {
		Instance::De => &DE,
		Instance::En => &EN,
		Instance::Es => &ES,
		Instance::Fr => &FR,
		Instance::Hi => &HI,
		Instance::Ta => &EN,
	}
}
