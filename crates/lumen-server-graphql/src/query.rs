// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GraphQL documents sent to the content API.

use std::fmt::Write;

const LICENSE_FIELDS: &str = "license { id url title default agreement iconHref }";

const TAXONOMY_TERMS: &str =
	"taxonomyTerms { nodes { id name navigation { path { nodes { label url id } } } } }";

/// Entity lookup. Exactly one of `$id` and `$alias` is set; numeric paths
/// (`/42`) are sent as an id.
pub fn alias_query() -> String {
	format!(
		r#"query uuid($id: Int, $alias: AliasInput) {{
  uuid(id: $id, alias: $alias) {{
    __typename
    id
    ... on AbstractRevision {{ id }}
    ... on Page {{
      alias trashed
      currentRevision {{ id title content }}
      navigation {{ data path {{ nodes {{ label url id }} }} }}
    }}
    ... on Article {{
      alias trashed
      currentRevision {{ id title content metaTitle metaDescription }}
      {license}
      revisions(unrevised: true) {{ totalCount }}
      {terms}
    }}
    ... on Video {{
      alias trashed
      currentRevision {{ id title url content }}
      {license}
      revisions(unrevised: true) {{ totalCount }}
      {terms}
    }}
    ... on Applet {{
      alias trashed
      currentRevision {{ id title url content metaTitle metaDescription }}
      {license}
      revisions(unrevised: true) {{ totalCount }}
      {terms}
    }}
    ... on Event {{
      alias trashed
      currentRevision {{ id title content }}
      {terms}
    }}
    ... on Course {{
      alias trashed
      currentRevision {{ id title }}
      pages {{ id alias trashed currentRevision {{ title trashed }} }}
      {terms}
    }}
    ... on CoursePage {{
      alias trashed
      currentRevision {{ id title content }}
      {license}
      revisions(unrevised: true) {{ totalCount }}
      course {{
        id alias
        currentRevision {{ title }}
        pages {{ id alias trashed currentRevision {{ title trashed }} }}
        {terms}
      }}
    }}
    ... on Exercise {{
      {exercise}
      {terms}
    }}
    ... on GroupedExercise {{
      {exercise}
      exerciseGroup {{ id alias {terms} }}
    }}
    ... on ExerciseGroup {{
      alias trashed
      currentRevision {{ id content }}
      {license}
      revisions(unrevised: true) {{ totalCount }}
      {terms}
      exercises {{ id alias trashed currentRevision {{ id content }} {license} solution {{ {solution} }} }}
    }}
    ... on Solution {{
      alias trashed
      exercise {{ id }}
    }}
    ... on User {{
      alias username
    }}
    ... on TaxonomyTerm {{
      alias trashed type name description
      navigation {{ data path {{ nodes {{ label url id }} }} }}
      children {{
        nodes {{
          __typename id
          ... on Article {{ alias trashed currentRevision {{ title }} }}
          ... on Video {{ alias trashed currentRevision {{ title }} }}
          ... on Applet {{ alias trashed currentRevision {{ title }} }}
          ... on Course {{ alias trashed currentRevision {{ title }} }}
          ... on Event {{ alias trashed currentRevision {{ title }} }}
          ... on Exercise {{ {exercise} }}
          ... on ExerciseGroup {{
            alias trashed currentRevision {{ id content }} {license}
            exercises {{ id alias trashed currentRevision {{ id content }} {license} solution {{ {solution} }} }}
          }}
          ... on TaxonomyTerm {{
            alias trashed type name description
            children {{
              nodes {{
                __typename id
                ... on Article {{ alias trashed currentRevision {{ title }} }}
                ... on Video {{ alias trashed currentRevision {{ title }} }}
                ... on Applet {{ alias trashed currentRevision {{ title }} }}
                ... on Course {{ alias trashed currentRevision {{ title }} }}
                ... on Event {{ alias trashed currentRevision {{ title }} }}
                ... on Exercise {{ alias trashed }}
                ... on ExerciseGroup {{ alias trashed }}
                ... on TaxonomyTerm {{ alias trashed type name }}
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}"#,
		license = LICENSE_FIELDS,
		terms = TAXONOMY_TERMS,
		exercise = exercise_fields(),
		solution = solution_fields(),
	)
}

/// Revision lookup by id.
pub fn revision_query() -> String {
	format!(
		r#"query revision($id: Int!) {{
  uuid(id: $id) {{
    __typename
    id
    ... on AbstractRevision {{
      trashed date content
      author {{ id username activeDonor activeAuthor activeReviewer }}
    }}
    ... on ArticleRevision {{ title metaTitle metaDescription changes repository {{ {repo} currentRevision {{ id title content metaTitle metaDescription }} }} }}
    ... on PageRevision {{ title repository {{ {repo} currentRevision {{ id title content }} }} }}
    ... on CoursePageRevision {{ title changes repository {{ {repo} currentRevision {{ id title content }} }} }}
    ... on CourseRevision {{ title metaDescription changes repository {{ {repo} currentRevision {{ id title content metaDescription }} }} }}
    ... on VideoRevision {{ title url changes repository {{ {repo} currentRevision {{ id title url content }} }} }}
    ... on EventRevision {{ title metaTitle metaDescription changes repository {{ {repo} currentRevision {{ id title content metaTitle metaDescription }} }} }}
    ... on AppletRevision {{ title url metaTitle metaDescription changes repository {{ {repo} currentRevision {{ id title url content metaTitle metaDescription }} }} }}
    ... on ExerciseRevision {{ changes repository {{ {repo} solution {{ {solution} }} currentRevision {{ id content }} }} }}
    ... on GroupedExerciseRevision {{ changes repository {{ {repo} solution {{ {solution} }} currentRevision {{ id content }} }} }}
    ... on ExerciseGroupRevision {{ changes repository {{ {repo} currentRevision {{ id content }} }} }}
    ... on SolutionRevision {{ changes repository {{ {repo} currentRevision {{ id content }} }} }}
  }}
}}"#,
		repo = format_args!("id alias trashed {LICENSE_FIELDS}"),
		solution = solution_fields(),
	)
}

/// User lookup by profile path.
pub fn user_query() -> &'static str {
	r#"query user($alias: AliasInput) {
  uuid(alias: $alias) {
    __typename
    id
    ... on User {
      alias username description lastLogin date
      activeReviewer activeAuthor activeDonor
    }
  }
}"#
}

/// Batched alias lookup. Each id gets its own aliased `uuid` field
/// (`u0`, `u1`, ...) so one request resolves them all.
pub fn aliases_query(ids: &[u64]) -> String {
	let mut query = String::from("query aliases {\n");
	for (index, id) in ids.iter().enumerate() {
		// Writing to a String cannot fail.
		let _ = writeln!(
			query,
			"  u{index}: uuid(id: {id}) {{ id ... on AbstractUuid {{ alias }} }}"
		);
	}
	query.push('}');
	query
}

fn exercise_fields() -> String {
	format!(
		"alias trashed currentRevision {{ id content }} {LICENSE_FIELDS} \
		 revisions(unrevised: true) {{ totalCount }} solution {{ {} }}",
		solution_fields()
	)
}

fn solution_fields() -> String {
	format!("id trashed {LICENSE_FIELDS} currentRevision {{ id content }}")
}
