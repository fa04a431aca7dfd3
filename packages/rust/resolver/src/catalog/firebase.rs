//! Firebase Admin SDK for Python.

use crate::profile::LibraryProfile;
use crate::table::DocTable;

pub const ID: &str = "firebase";

pub const DOCS_URL: &str = "https://firebase.google.com/docs/reference";

pub const PREFIXES: &[&str] = &["firebase_admin.", "firebase."];

pub const TABLE: &[(&str, &str)] = &[
    (
        "initialize_app",
        r#"# firebase_admin.initialize_app

Initializes and returns a new App instance. Must be called before any other Admin SDK call.

## Parameters:
- credential (Credential): Optional. Defaults to Google Application Default Credentials.
- options (dict): Optional. App options such as databaseURL or storageBucket.
- name (str): Optional. Name of the app; defaults to "[DEFAULT]".

## Example:
```python
import firebase_admin
from firebase_admin import credentials

cred = credentials.Certificate("service-account.json")
app = firebase_admin.initialize_app(cred)
```
"#,
    ),
    (
        "verify_id_token",
        r#"# auth.verify_id_token

Verifies the signature and data of a Firebase ID token and returns its decoded claims.

## Parameters:
- id_token (str): Required. The ID token sent by the client.
- check_revoked (bool): Optional. Also check whether the token was revoked.

## Example:
```python
from firebase_admin import auth

decoded = auth.verify_id_token(id_token)
uid = decoded["uid"]
```
"#,
    ),
    (
        "create_user",
        r#"# auth.create_user

Creates a new user account with the given properties.

## Parameters:
- email (str): Optional. The user's primary email.
- password (str): Optional. Raw password, at least six characters.
- display_name (str): Optional. The user's display name.

## Example:
```python
user = auth.create_user(email="ada@example.com", password="secret123")
print(user.uid)
```
"#,
    ),
    (
        "firestore.client",
        r#"# firestore.client

Returns a Firestore client bound to the default (or given) app.

## Example:
```python
from firebase_admin import firestore

db = firestore.client()
db.collection("users").document("ada").set({"name": "Ada"})
```
"#,
    ),
    (
        "messaging.send",
        r#"# messaging.send

Sends a message through Firebase Cloud Messaging and returns the message id.

## Parameters:
- message (Message): Required. The message to send.
- dry_run (bool): Optional. Validate without delivering.

## Example:
```python
from firebase_admin import messaging

message = messaging.Message(data={"score": "850"}, token=registration_token)
message_id = messaging.send(message)
```
"#,
    ),
];

pub fn profile() -> LibraryProfile {
    LibraryProfile::new(ID, "Firebase Admin SDK", DOCS_URL)
        .with_prefixes(PREFIXES)
        .with_table(DocTable::from_static(TABLE))
}
