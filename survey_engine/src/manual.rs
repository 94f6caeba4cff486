/*!

This is the long-form manual for `survey_engine` and `mesurvey`.

## The questionnaire

The questionnaire is a fixed script of five data-entry steps followed by a
confirmation step:

| Step | Section                                     | Keys written                                                                 |
|------|---------------------------------------------|------------------------------------------------------------------------------|
| 1    | A: Background Information                   | `club_name`, `league`, `role`, `duration_in_club`                            |
| 2    | B: Monitoring and Evaluation (M&E) Strategies | `q5_know_M&E`, `q6_M&E_system_in_place`, `q7_M&E_duration`, `q8_aspects`   |
| 3    | C: Effectiveness of M&E Strategies          | `q9_effectiveness`, `q10_metrics`, `q11_report_frequency`, `q12_most_improvement` |
| 4    | D: Implementing M&E Strategies              | `qD_challenges`, `qD_measures`, `q_do_more_detailed_M&E`                     |
| 5    | E: Suggestions for Improvement              | `q16_resources`, `q17_concrete_changes`, `q18_other_comments`                |
| 6    | Thank you                                   |                                                                              |

The answers of steps 1 to 4 accumulate in the session as the respondent moves
forward. Going back keeps them; answering a step again replaces its values.
Step 5 is never merged into the session: submitting it builds the response
row directly.

## How answers are stored

All answers are strings.

- Free text is stored as typed, possibly empty.
- Drop-downs start on a placeholder such as `— Select your league —`. Keeping
  the placeholder stores an empty string.
- Radio questions start with nothing selected. No selection stores an empty string.
- Picking `Other (specify)` for the role stores `Other: ` followed by the
  follow-up text.
- Multi-select answers are joined with `; `. When `Other (specify)` is among
  the selections, `; ` and the follow-up text are appended, even when the
  follow-up is empty:

```text
Player performance; Other (specify); Youth academy
Club governance; Other (specify);
```

## Response rows

A response row is the unit of persistence. Its columns are:

1. `timestamp`, local time formatted as `%Y-%m-%d %H:%M:%S`
2. the answers of steps 1 to 4, in the order they were first entered
3. the answers of step 5

The keys do not depend on which optional branches the respondent took.

## Transitions

| From           | Back           | Next / Submit                      |
|----------------|----------------|------------------------------------|
| Background     | (ignored)      | MEAwareness                        |
| MEAwareness    | Background     | Effectiveness                      |
| Effectiveness  | MEAwareness    | Implementation                     |
| Implementation | Effectiveness  | Suggestions                        |
| Suggestions    | Implementation | Done (submit only, once persisted) |
| Done           | (ignored)      | (ignored), reset goes to Background |

Ignored transitions return a `SessionError::InvalidTransition` and leave the
session as it was.

## Duplicate submissions

There is no idempotency key. A respondent who submits twice, or who resets
and fills the questionnaire again, produces two rows. Concurrent respondents
append independently to the same worksheet.

*/
