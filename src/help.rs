// s3-setct: set the content type of an object in S3 compatible storage
// Copyright 2026 The s3-setct Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Usage text printed next to configuration and input errors.
pub const HELP_TEXT: &str = "\
s3_setct
Set content type of an object in s3.

Ex:
OBJECTBUCKET='bucketname'
OBJECTTYPE='application/epub+zip'
OBJECTURI='https://s3.us-west-002.backblazeb2.com'
OBJECTREGION='us-west-002'
OBJECTKEYID='<s3-keyId>'
OBJECTKEY='<s3-key>'
 
echo 'some_ebook.epub' | s3_setct 
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ALL_VARS;

    #[test]
    fn test_help_names_every_variable() {
        for var in ALL_VARS {
            assert!(HELP_TEXT.contains(&format!("{var}='")), "{var} missing");
        }
        assert!(HELP_TEXT.starts_with("s3_setct\n"));
        assert!(HELP_TEXT.ends_with("| s3_setct \n"));
    }
}
