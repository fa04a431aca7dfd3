//! AWS SDK for Python (boto3).

use crate::profile::LibraryProfile;
use crate::table::DocTable;

pub const ID: &str = "aws";

pub const DOCS_URL: &str = "https://docs.aws.amazon.com/sdk-for-python/latest/reference/";

pub const PREFIXES: &[&str] = &["boto3.", "aws."];

pub const TABLE: &[(&str, &str)] = &[
    (
        "client",
        r#"# boto3.client

Creates a low-level service client by name.

## Parameters:
- service_name (str): Required. The name of a service, e.g. "s3" or "dynamodb".
- region_name (str): Optional. The region to connect to.
- aws_access_key_id (str): Optional. Overrides the default credential chain.

## Example:
```python
import boto3

s3 = boto3.client("s3", region_name="us-east-1")
response = s3.list_buckets()
```
"#,
    ),
    (
        "resource",
        r#"# boto3.resource

Creates a resource service client by name. Resources give an object-oriented interface over the low-level client.

## Parameters:
- service_name (str): Required. The name of a service, e.g. "s3" or "dynamodb".
- region_name (str): Optional. The region to connect to.

## Example:
```python
import boto3

s3 = boto3.resource("s3")
bucket = s3.Bucket("my-bucket")
```
"#,
    ),
    (
        "Session",
        r#"# boto3.session.Session

Stores configuration state and allows you to create service clients and resources.

## Parameters:
- profile_name (str): Optional. Named profile from the shared credentials file.
- region_name (str): Optional. Default region for clients created from this session.

## Example:
```python
session = boto3.session.Session(profile_name="dev")
s3 = session.client("s3")
```
"#,
    ),
    (
        "upload_file",
        r#"# S3.Client.upload_file

Uploads a local file to an S3 object, handling multipart transfers automatically.

## Parameters:
- Filename (str): Required. Path to the local file.
- Bucket (str): Required. Name of the target bucket.
- Key (str): Required. Object key to write.

## Example:
```python
s3 = boto3.client("s3")
s3.upload_file("report.csv", "my-bucket", "reports/report.csv")
```
"#,
    ),
    (
        "put_item",
        r#"# DynamoDB.Table.put_item

Creates a new item, or replaces an old item with a new item.

## Parameters:
- Item (dict): Required. Attribute name to value map; must include the primary key.
- ConditionExpression (str): Optional. Condition that must hold for the write to succeed.

## Example:
```python
table = boto3.resource("dynamodb").Table("users")
table.put_item(Item={"id": "42", "name": "Ada"})
```
"#,
    ),
];

pub fn profile() -> LibraryProfile {
    LibraryProfile::new(ID, "AWS SDK for Python (boto3)", DOCS_URL)
        .with_prefixes(PREFIXES)
        .with_table(DocTable::from_static(TABLE))
}
