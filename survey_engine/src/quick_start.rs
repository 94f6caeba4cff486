/*!

# Quick start with Google Sheets

This section walks through collecting responses end to end with `mesurvey`,
storing them in a Google Sheets spreadsheet.

**Creating the service account** In the Google Cloud console, create a project,
enable the *Google Sheets API* and the *Google Drive API*, then create a
service account and download its key in JSON format. Save it next to the
program as `service_account.json`, or point to it with `--credentials`.

**Creating the spreadsheet** Create an empty spreadsheet named
`M&E_Soccer_Clubs_Responses` and share it with the `client_email` of the
service account, with editor rights. The `responses` worksheet does not need
to exist: it is created, with a header row, on the first submission.

**Collecting responses** Run the questionnaire in a terminal:

```bash
mesurvey fill
```

The respondent first agrees to the research consent, then walks through the
five sections. Drop-downs and radio buttons are answered with the number of
the option, multi-selects with a comma-separated list of numbers
(`1,3,6`). An empty answer keeps the placeholder. At the end of each section,
`n` moves to the next one and `b` goes back.

If the spreadsheet cannot be reached (no network, missing credentials, sheet
not shared), the response is appended to `responses_backup.csv` instead and
the respondent still sees the confirmation page:

```text
[2024-05-01T10:30:00Z WARN  mesurvey::survey::gateway] append: remote append failed, writing to responses_backup.csv: Could not read the service account file service_account.json
Google Sheets failed: Could not read the service account file service_account.json
Saving locally as backup... (responses_backup.csv)
```

**Looking at the results** The admin view lists every response of the
worksheet and exports them:

```bash
mesurvey admin
mesurvey export --username <user> --password <password> --format xlsx
```

The export is written to `M&E_responses.csv` or `M&E_responses.xlsx`.

All the settings (spreadsheet name, worksheet, credential file, backup file,
export directory) can also be given in a JSON file passed with `--config`.
See the [manual](../manual/index.html) for the format of the stored answers.

*/
